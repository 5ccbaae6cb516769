//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod check_session;
pub mod config;
pub mod credentials;
pub mod sign_in;
pub mod sign_out;
pub mod token;

// Re-exports
pub use bootstrap::{BootstrapOutcome, BootstrapUseCase};
pub use check_session::{CheckSessionUseCase, SessionStatus};
pub use config::AuthConfig;
pub use credentials::CredentialVerifier;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use token::SessionTokenCodec;
