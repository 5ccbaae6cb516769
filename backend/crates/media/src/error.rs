//! Media Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type MediaResult<T> = Result<T, MediaError>;

#[derive(Debug, Error)]
pub enum MediaError {
    /// Directory exists but could not be read or created
    #[error("Media directory {path} is unreadable: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MediaError {
    pub fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        MediaError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MediaError::Io { .. } => ErrorKind::StorageFailure,
        }
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            e @ MediaError::Io { .. } => {
                AppError::storage("Media could not be loaded").with_source(e)
            }
        }
    }
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Media indexing failed");
        self.into_app_error().into_response()
    }
}
