//! JSON extractor with [`AppError`] rejections
//!
//! axum's `Json` rejects bad bodies with plain-text 400/415/422 responses.
//! [`AppJson`] routes the same rejections through `AppError`, so a malformed
//! body is a `VALIDATION_FAILURE` like any other bad input.

use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};

use crate::error::app_error::AppError;

#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    axum::Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
