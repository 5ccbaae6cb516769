//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::SessionTokenCodec;
use crate::domain::repository::SessionStore;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    codec: SessionTokenCodec,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            codec: SessionTokenCodec::new(config.session_secret),
        }
    }

    /// Destroy the session behind `token`. Missing, forged or already
    /// destroyed tokens are a no-op.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<()> {
        let Some(session_id) = token.and_then(|token| self.codec.verify(token)) else {
            return Ok(());
        };

        self.session_store.delete(session_id).await?;

        tracing::info!(session_id = %session_id, "User signed out");
        Ok(())
    }
}
