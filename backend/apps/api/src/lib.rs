//! Dashboard API
//!
//! Configuration and router assembly, shared by the binary and the HTTP
//! integration tests.

pub mod app;
pub mod config;

pub use app::{AppState, build_router};
pub use config::{AppConfig, Backend};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
