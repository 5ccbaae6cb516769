//! Application Layer
//!
//! Owner-scoped use cases, one per resource kind. The owner is always the
//! caller's `Identity`.

pub mod notes;
pub mod tasks;
pub mod tiles;

pub use notes::NotesUseCase;
pub use tasks::TasksUseCase;
pub use tiles::{CreateTileInput, TilesUseCase};
