//! HTTP Handlers
//!
//! Every handler takes the caller's `Identity`, placed in the request by
//! the session middleware in front of these routes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::identity::Identity;
use kernel::json::AppJson;

use crate::application::{CreateTileInput, NotesUseCase, TasksUseCase, TilesUseCase};
use crate::domain::repository::{NoteRepository, TaskRepository, TileRepository};
use crate::error::ResourceResult;
use crate::presentation::dto::{
    CreateTaskRequest, CreateTileRequest, DataResponse, MessageDataResponse, MessageResponse,
    NoteResponse, SaveNoteRequest, TaskResponse, TileResponse, UpdateTaskRequest,
};

/// Shared state for resource handlers
pub struct ResourceAppState<R> {
    pub repo: Arc<R>,
}

impl<R> Clone for ResourceAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: text.to_string(),
    })
}

// ============================================================================
// Tiles
// ============================================================================

/// GET /api/apps
pub async fn list_tiles<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
) -> ResourceResult<Json<DataResponse<Vec<TileResponse>>>>
where
    R: TileRepository + Send + Sync + 'static,
{
    let tiles = TilesUseCase::new(state.repo.clone()).list(&identity).await?;

    Ok(Json(DataResponse {
        data: tiles.into_iter().map(TileResponse::from).collect(),
    }))
}

/// POST /api/apps, POST /api/apps/add
pub async fn create_tile<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    AppJson(req): AppJson<CreateTileRequest>,
) -> ResourceResult<(StatusCode, Json<MessageDataResponse<TileResponse>>)>
where
    R: TileRepository + Send + Sync + 'static,
{
    let input = CreateTileInput {
        name: req.name,
        url: req.url,
        icon: req.icon,
    };

    let tile = TilesUseCase::new(state.repo.clone())
        .create(&identity, input)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDataResponse {
            message: "Shortcut added".to_string(),
            data: tile.into(),
        }),
    ))
}

/// DELETE /api/apps/{id}
pub async fn delete_tile<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
) -> ResourceResult<Json<MessageResponse>>
where
    R: TileRepository + Send + Sync + 'static,
{
    TilesUseCase::new(state.repo.clone())
        .delete(&identity, &id)
        .await?;

    Ok(message("Shortcut deleted"))
}

// ============================================================================
// Note
// ============================================================================

/// GET /api/notes
pub async fn get_note<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
) -> ResourceResult<Json<NoteResponse>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    let content = NotesUseCase::new(state.repo.clone())
        .content(&identity)
        .await?;

    Ok(Json(NoteResponse { content }))
}

/// POST /api/notes
pub async fn save_note<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    AppJson(req): AppJson<SaveNoteRequest>,
) -> ResourceResult<Json<MessageResponse>>
where
    R: NoteRepository + Send + Sync + 'static,
{
    NotesUseCase::new(state.repo.clone())
        .save(&identity, &req.content)
        .await?;

    Ok(message("Note saved"))
}

// ============================================================================
// Tasks
// ============================================================================

/// GET /api/todos
pub async fn list_tasks<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
) -> ResourceResult<Json<DataResponse<Vec<TaskResponse>>>>
where
    R: TaskRepository + Send + Sync + 'static,
{
    let tasks = TasksUseCase::new(state.repo.clone()).list(&identity).await?;

    Ok(Json(DataResponse {
        data: tasks.into_iter().map(TaskResponse::from).collect(),
    }))
}

/// POST /api/todos
pub async fn create_task<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    AppJson(req): AppJson<CreateTaskRequest>,
) -> ResourceResult<(StatusCode, Json<DataResponse<TaskResponse>>)>
where
    R: TaskRepository + Send + Sync + 'static,
{
    let task = TasksUseCase::new(state.repo.clone())
        .create(&identity, &req.task)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: task.into() })))
}

/// PUT /api/todos/{id}
pub async fn update_task<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateTaskRequest>,
) -> ResourceResult<Json<MessageDataResponse<TaskResponse>>>
where
    R: TaskRepository + Send + Sync + 'static,
{
    let task = TasksUseCase::new(state.repo.clone())
        .set_completed(&identity, &id, req.completed)
        .await?;

    Ok(Json(MessageDataResponse {
        message: "Task updated".to_string(),
        data: task.into(),
    }))
}

/// DELETE /api/todos/{id}
pub async fn delete_task<R>(
    State(state): State<ResourceAppState<R>>,
    identity: Identity,
    Path(id): Path<String>,
) -> ResourceResult<Json<MessageResponse>>
where
    R: TaskRepository + Send + Sync + 'static,
{
    TasksUseCase::new(state.repo.clone())
        .delete(&identity, &id)
        .await?;

    Ok(message("Task deleted"))
}
