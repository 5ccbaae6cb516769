//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user with that name
    #[error("User not found")]
    UserNotFound,

    /// User exists, PIN does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Malformed login input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Session missing, forged, unknown or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    ///
    /// Both login failures share one kind so the boundary cannot be used
    /// to enumerate user names.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                ErrorKind::InvalidCredentials
            }
            AuthError::Validation(_) => ErrorKind::ValidationFailure,
            AuthError::SessionInvalid => ErrorKind::Unauthenticated,
            AuthError::Database(_) => ErrorKind::StorageFailure,
            AuthError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                AppError::invalid_credentials("Invalid user name or PIN")
                    .with_action("Check your user name and PIN")
            }
            AuthError::Validation(msg) => AppError::validation(msg),
            AuthError::SessionInvalid => {
                AppError::unauthenticated("Not signed in").with_action("Please log in")
            }
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::internal(msg),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                tracing::warn!(reason = %self, "Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        let auth_required = matches!(self, AuthError::SessionInvalid);

        let mut response = self.into_app_error().into_response();
        if auth_required {
            response
                .headers_mut()
                .insert("x-auth-required", HeaderValue::from_static("true"));
        }
        response
    }
}

impl From<platform::pin::PinHashError> for AuthError {
    fn from(err: platform::pin::PinHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AuthError {
    fn from(err: tokio::task::JoinError) -> Self {
        AuthError::Internal(format!("PIN hashing task failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_login_failures_share_kind() {
        assert_eq!(AuthError::UserNotFound.kind(), ErrorKind::InvalidCredentials);
        assert_eq!(
            AuthError::InvalidCredentials.kind(),
            ErrorKind::InvalidCredentials
        );
        assert_eq!(
            AuthError::UserNotFound.into_app_error().message(),
            AuthError::InvalidCredentials.into_app_error().message()
        );
    }

    #[test]
    fn test_session_invalid_sets_header() {
        let response = AuthError::SessionInvalid.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get("x-auth-required").unwrap(),
            "true"
        );
    }

    #[test]
    fn test_internal_is_server_error() {
        let response = AuthError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
