//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - The service error taxonomy and result aliases
//! - Typed identifiers (users, tiles, tasks)
//! - The authenticated caller [`identity::Identity`]
//! - A JSON extractor whose rejections speak the same error format
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod identity;
#[cfg(feature = "axum")]
pub mod json;
