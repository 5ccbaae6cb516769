//! Repository Traits
//!
//! Every method takes the caller's id as `owner`. Mutations apply only to
//! rows owned by `owner`, checked and applied in one step; a foreign row
//! behaves exactly like a missing one.

use kernel::id::{TaskId, TileId, UserId};

use crate::domain::entity::note::Note;
use crate::domain::entity::task::{NewTask, Task};
use crate::domain::entity::tile::{NewTile, Tile};
use crate::error::ResourceResult;

#[trait_variant::make(TileRepository: Send)]
pub trait LocalTileRepository {
    /// Tiles owned by `owner`, in creation order
    async fn list_tiles(&self, owner: &UserId) -> ResourceResult<Vec<Tile>>;

    async fn create_tile(&self, owner: &UserId, tile: &NewTile) -> ResourceResult<Tile>;

    /// `false` when no tile with that id belongs to `owner`
    async fn delete_tile(&self, owner: &UserId, id: TileId) -> ResourceResult<bool>;
}

#[trait_variant::make(NoteRepository: Send)]
pub trait LocalNoteRepository {
    async fn find_note(&self, owner: &UserId) -> ResourceResult<Option<Note>>;

    /// Insert or overwrite the single note of `owner`
    async fn save_note(&self, owner: &UserId, content: &str) -> ResourceResult<Note>;
}

#[trait_variant::make(TaskRepository: Send)]
pub trait LocalTaskRepository {
    /// Tasks owned by `owner`, in creation order
    async fn list_tasks(&self, owner: &UserId) -> ResourceResult<Vec<Task>>;

    async fn create_task(&self, owner: &UserId, task: &NewTask) -> ResourceResult<Task>;

    /// `None` when no task with that id belongs to `owner`
    async fn set_task_completed(
        &self,
        owner: &UserId,
        id: TaskId,
        completed: bool,
    ) -> ResourceResult<Option<Task>>;

    async fn delete_task(&self, owner: &UserId, id: TaskId) -> ResourceResult<bool>;
}
