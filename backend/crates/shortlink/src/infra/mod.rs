//! Infrastructure Layer

pub mod memory;
pub mod postgres;

pub use memory::MemoryShortLinkRepository;
pub use postgres::PgShortLinkRepository;
