//! Resource Error Types
//!
//! Resource-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. A row owned by someone else is
//! reported exactly like a row that does not exist.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ResourceResult<T> = Result<T, ResourceError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// Payload failed per-kind validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Absent, or owned by another user
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::Validation(_) => ErrorKind::ValidationFailure,
            ResourceError::NotFound(_) => ErrorKind::NotFound,
            ResourceError::Database(_) => ErrorKind::StorageFailure,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            ResourceError::Validation(msg) => AppError::validation(msg),
            ResourceError::NotFound(what) => AppError::not_found(format!("{what} not found")),
            ResourceError::Database(e) => AppError::from(e),
        }
    }

    fn log(&self) {
        match self {
            ResourceError::Database(e) => {
                tracing::error!(error = %e, "Resource database error");
            }
            _ => {
                tracing::debug!(error = %self, "Resource request rejected");
            }
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_is_404_never_403() {
        let response = ResourceError::NotFound("Task").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_is_400() {
        assert_eq!(
            ResourceError::Validation("x".into()).kind(),
            ErrorKind::ValidationFailure
        );
    }
}
