//! Media Indexer
//!
//! Lists `.mp3` files under `<root>/music` and `.mp4` files under
//! `<root>/videos` for the dashboard's player. No ownership, no session.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::{MediaConfig, index, list_media};
pub use domain::{MediaEntry, MediaKind};
pub use error::{MediaError, MediaResult};
pub use presentation::media_router;
