//! In-memory Repository Implementations
//!
//! A single generic [`OwnedTable`] gives tiles and tasks the same
//! owner-filtered behavior; notes live in a map keyed by owner, so
//! "one note per user" holds by construction. Clones share state.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{TaskId, TileId, UserId};
use tokio::sync::RwLock;

use crate::domain::entity::note::Note;
use crate::domain::entity::task::{NewTask, Task};
use crate::domain::entity::tile::{NewTile, Tile};
use crate::domain::owned::OwnedResource;
use crate::domain::repository::{NoteRepository, TaskRepository, TileRepository};
use crate::error::ResourceResult;

// ============================================================================
// Owned Table
// ============================================================================

/// Rows keyed by a monotonically increasing id (creation order)
#[derive(Debug)]
pub struct OwnedTable<R> {
    rows: BTreeMap<i64, R>,
    last_id: i64,
}

impl<R> Default for OwnedTable<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<R> OwnedTable<R>
where
    R: OwnedResource + Clone,
{
    pub fn insert_with(&mut self, build: impl FnOnce(i64) -> R) -> R {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    pub fn list(&self, owner: &UserId) -> Vec<R> {
        self.rows
            .values()
            .filter(|row| row.is_owned_by(owner))
            .cloned()
            .collect()
    }

    /// Apply `change` to the row only if `owner` owns it
    pub fn update(&mut self, owner: &UserId, id: i64, change: impl FnOnce(&mut R)) -> Option<R> {
        let row = self.rows.get_mut(&id).filter(|row| row.is_owned_by(owner))?;
        change(row);
        Some(row.clone())
    }

    pub fn remove(&mut self, owner: &UserId, id: i64) -> bool {
        match self.rows.get(&id) {
            Some(row) if row.is_owned_by(owner) => self.rows.remove(&id).is_some(),
            _ => false,
        }
    }
}

// ============================================================================
// Repository
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryResourceRepository {
    tiles: Arc<RwLock<OwnedTable<Tile>>>,
    notes: Arc<RwLock<HashMap<UserId, Note>>>,
    tasks: Arc<RwLock<OwnedTable<Task>>>,
}

impl MemoryResourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes across all users
    pub async fn note_count(&self) -> usize {
        self.notes.read().await.len()
    }
}

impl TileRepository for MemoryResourceRepository {
    async fn list_tiles(&self, owner: &UserId) -> ResourceResult<Vec<Tile>> {
        Ok(self.tiles.read().await.list(owner))
    }

    async fn create_tile(&self, owner: &UserId, tile: &NewTile) -> ResourceResult<Tile> {
        let mut tiles = self.tiles.write().await;
        Ok(tiles.insert_with(|id| Tile {
            id: TileId::new(id),
            owner_id: *owner,
            name: tile.name.clone(),
            url: tile.url.clone(),
            icon: tile.icon.clone(),
            created_at: Utc::now(),
        }))
    }

    async fn delete_tile(&self, owner: &UserId, id: TileId) -> ResourceResult<bool> {
        Ok(self.tiles.write().await.remove(owner, id.get()))
    }
}

impl NoteRepository for MemoryResourceRepository {
    async fn find_note(&self, owner: &UserId) -> ResourceResult<Option<Note>> {
        Ok(self.notes.read().await.get(owner).cloned())
    }

    async fn save_note(&self, owner: &UserId, content: &str) -> ResourceResult<Note> {
        let note = Note {
            owner_id: *owner,
            content: content.to_string(),
            updated_at: Utc::now(),
        };
        self.notes.write().await.insert(*owner, note.clone());
        Ok(note)
    }
}

impl TaskRepository for MemoryResourceRepository {
    async fn list_tasks(&self, owner: &UserId) -> ResourceResult<Vec<Task>> {
        Ok(self.tasks.read().await.list(owner))
    }

    async fn create_task(&self, owner: &UserId, task: &NewTask) -> ResourceResult<Task> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.insert_with(|id| Task {
            id: TaskId::new(id),
            owner_id: *owner,
            text: task.text.clone(),
            completed: false,
            created_at: Utc::now(),
        }))
    }

    async fn set_task_completed(
        &self,
        owner: &UserId,
        id: TaskId,
        completed: bool,
    ) -> ResourceResult<Option<Task>> {
        Ok(self
            .tasks
            .write()
            .await
            .update(owner, id.get(), |task| task.completed = completed))
    }

    async fn delete_task(&self, owner: &UserId, id: TaskId) -> ResourceResult<bool> {
        Ok(self.tasks.write().await.remove(owner, id.get()))
    }
}
