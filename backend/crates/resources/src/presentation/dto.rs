//! API DTOs (Data Transfer Objects)
//!
//! Request types list only the documented fields; anything else in the
//! body (an `owner` or `userId`, say) is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::task::Task;
use crate::domain::entity::tile::Tile;

// ============================================================================
// Envelopes
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageDataResponse<T> {
    pub message: String,
    pub data: T,
}

// ============================================================================
// Tiles
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTileRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl From<Tile> for TileResponse {
    fn from(tile: Tile) -> Self {
        Self {
            id: tile.id.get(),
            name: tile.name,
            url: tile.url,
            icon: tile.icon,
            created_at: tile.created_at,
        }
    }
}

// ============================================================================
// Note
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct SaveNoteRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub content: String,
}

// ============================================================================
// Tasks
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub task: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.get(),
            task: task.text,
            completed: task.completed,
            created_at: task.created_at,
        }
    }
}
