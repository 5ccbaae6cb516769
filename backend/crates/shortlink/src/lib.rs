//! Short-Link Resolver
//!
//! Maps random eight-character codes to http(s) destinations. Links are
//! public, permanent and unowned. The resolver answers single-segment
//! paths, so every top-level name the server itself uses is reserved:
//! never resolved, never generated.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use application::{CodeGenerator, CodeSource, ShortLinkConfig};
pub use domain::{ReservedSegments, ShortLinkRepository};
pub use error::{ShortLinkError, ShortLinkResult, not_found_page};
pub use infra::{MemoryShortLinkRepository, PgShortLinkRepository};
pub use presentation::{ShortLinkAppState, shortlink_router};
