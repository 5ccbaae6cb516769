//! User Name Value Object
//!
//! The display name a person types on the login form. Matching is exact:
//! no case folding, no normalization, so "Admin" and "admin" are two
//! different accounts.
//!
//! ## Invariants
//! - Length: 1..=64 characters
//! - No leading or trailing whitespace
//! - No control characters

use std::fmt;

use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

pub const USER_NAME_MAX_LENGTH: usize = 64;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name cannot be empty")]
    Empty,

    #[error("User name is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error("User name cannot start or end with whitespace")]
    SurroundingWhitespace,

    #[error("User name contains a control character at position {position}")]
    ControlCharacter { position: usize },
}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated user name (case-sensitive, stored as typed)
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let input = input.into();

        if input.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = input.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if input.trim() != input {
            return Err(UserNameError::SurroundingWhitespace);
        }

        if let Some(position) = input.chars().position(|c| c.is_control()) {
            return Err(UserNameError::ControlCharacter { position });
        }

        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
