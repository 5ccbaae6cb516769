//! Infrastructure Layer
//!
//! Database and in-process implementations of the repository traits.

pub mod memory;
pub mod postgres;

pub use memory::{MemorySessionStore, MemoryUserRepository};
pub use postgres::PgAuthRepository;
