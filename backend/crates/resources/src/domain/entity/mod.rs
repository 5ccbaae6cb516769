pub mod note;
pub mod task;
pub mod tile;
