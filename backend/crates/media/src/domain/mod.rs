pub mod entry;

pub use entry::{MediaEntry, MediaKind};
