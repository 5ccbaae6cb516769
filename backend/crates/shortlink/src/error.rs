//! Short-Link Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type ShortLinkResult<T> = Result<T, ShortLinkError>;

#[derive(Debug, Error)]
pub enum ShortLinkError {
    /// Destination rejected at shorten time
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown code, malformed code, or a reserved segment
    #[error("Short link not found")]
    NotFound,

    /// Stored destination no longer passes the http(s) check
    #[error("Stored destination is not redirectable: {0}")]
    InvalidDestination(String),

    /// Every attempt hit a reserved or taken code
    #[error("Short code generation exhausted after {0} attempts")]
    GenerationExhausted(u32),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ShortLinkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShortLinkError::Validation(_) | ShortLinkError::InvalidDestination(_) => {
                ErrorKind::ValidationFailure
            }
            ShortLinkError::NotFound => ErrorKind::NotFound,
            ShortLinkError::GenerationExhausted(_) => ErrorKind::GenerationExhausted,
            ShortLinkError::Database(_) => ErrorKind::StorageFailure,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            ShortLinkError::Validation(msg) => AppError::validation(msg),
            ShortLinkError::NotFound => AppError::not_found("Short link not found"),
            ShortLinkError::InvalidDestination(_) => {
                AppError::validation("Invalid destination URL configured")
            }
            ShortLinkError::GenerationExhausted(attempts) => AppError::generation_exhausted(
                format!("Could not allocate a short code after {attempts} attempts"),
            )
            .with_action("Please try again"),
            ShortLinkError::Database(e) => AppError::from(e),
        }
    }

    fn log(&self) {
        match self {
            ShortLinkError::InvalidDestination(url) => {
                tracing::warn!(destination = %url, "Refusing redirect to invalid stored destination");
            }
            ShortLinkError::GenerationExhausted(attempts) => {
                tracing::error!(attempts, "Short code generation exhausted");
            }
            ShortLinkError::Database(e) => {
                tracing::error!(error = %e, "Short-link database error");
            }
            _ => {
                tracing::debug!(error = %self, "Short-link request rejected");
            }
        }
    }
}

impl IntoResponse for ShortLinkError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// Generic HTML page for anything that is neither a route nor a known code
pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        axum::response::Html(NOT_FOUND_HTML),
    )
        .into_response()
}

const NOT_FOUND_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>404 - Page not found</title>
</head>
<body>
    <h1>404</h1>
    <p>The page you are looking for does not exist.</p>
    <p><a href="/">Back to the dashboard</a></p>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_is_500() {
        let response = ShortLinkError::GenerationExhausted(5).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_destination_is_400() {
        let response = ShortLinkError::InvalidDestination("javascript:alert(1)".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_page_is_html() {
        let response = not_found_page();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
