//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::MemoryResourceRepository;
pub use postgres::PgResourceRepository;
