//! Ownership-Scoped Resource Store
//!
//! Per-user dashboard data: shortcut tiles, a single note, a task list.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, the ownership contract, repository traits
//! - `application/` - Use cases, one per resource kind
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every operation takes the caller's `kernel::identity::Identity`. A row
//! owned by someone else is indistinguishable from a missing one
//! (`NotFound`, never a forbidden signal).

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

pub use domain::repository::{NoteRepository, TaskRepository, TileRepository};
pub use error::{ResourceError, ResourceResult};
pub use infra::{MemoryResourceRepository, PgResourceRepository};
pub use presentation::resource_router;
