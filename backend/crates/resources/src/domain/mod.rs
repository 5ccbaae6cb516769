//! Domain Layer
//!
//! Contains entities, the ownership contract, and repository traits.

pub mod entity;
pub mod owned;
pub mod repository;
pub mod text;

// Re-exports
pub use entity::{
    note::Note,
    task::{NewTask, Task},
    tile::{NewTile, Tile},
};
pub use owned::OwnedResource;
pub use repository::{NoteRepository, TaskRepository, TileRepository};
