//! Authenticated caller
//!
//! The session layer resolves a cookie into an [`Identity`] and stores it in
//! the request extensions; every owner-scoped operation takes it as input.

use crate::id::UserId;

/// Who is calling: the owning-user reference plus the display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub user_name: String,
}

impl Identity {
    pub fn new(user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

#[cfg(feature = "axum")]
impl<S> axum::extract::FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = crate::error::app_error::AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            crate::error::app_error::AppError::unauthenticated("Not signed in")
                .with_action("Please log in")
        })
    }
}
