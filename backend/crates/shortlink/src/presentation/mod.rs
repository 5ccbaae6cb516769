//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::ShortLinkAppState;
pub use router::shortlink_router;
