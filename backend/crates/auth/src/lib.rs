//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Credential store: users with an Argon2id-hashed PIN, looked up by
//!   exact (case-sensitive) user name
//! - One-time bootstrap of a documented default account
//! - Server-side sessions behind an HMAC-signed cookie token, with a
//!   fixed absolute TTL and lazy expiry
//! - `require_session` middleware that hands the caller's `Identity` to
//!   protected handlers
//!
//! ## Security Model
//! - Unknown users and wrong PINs cost one Argon2 verification each and
//!   render the same 401 at the boundary
//! - Every successful login mints a new token and destroys the old one
//! - Tokens with a bad signature never reach the session store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::{BootstrapOutcome, SessionStatus};
pub use domain::repository::{SessionStore, UserRepository};
pub use error::{AuthError, AuthResult};
pub use infra::{MemorySessionStore, MemoryUserRepository, PgAuthRepository};
pub use presentation::{AuthAppState, SessionGuard, auth_router, require_session};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
