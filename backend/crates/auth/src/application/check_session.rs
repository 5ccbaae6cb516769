//! Check Session Use Case
//!
//! Resolves a cookie token into the caller's identity. Expiry is enforced
//! here, lazily: an expired session is deleted on first sight and the
//! caller is treated as signed out. Use never extends the expiry. The
//! status check only reads.

use std::sync::Arc;

use chrono::Utc;
use kernel::identity::Identity;

use crate::application::config::AuthConfig;
use crate::application::token::SessionTokenCodec;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Session status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub logged_in: bool,
    pub user_name: Option<String>,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore,
{
    session_store: Arc<S>,
    codec: SessionTokenCodec,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(session_store: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_store,
            codec: SessionTokenCodec::new(config.session_secret),
        }
    }

    /// Identity behind `token`, or `SessionInvalid`
    pub async fn authenticate(&self, token: Option<&str>) -> AuthResult<Identity> {
        Ok(self.get_session(token).await?.identity())
    }

    /// Read-only login check for front-ends; never fails and never deletes
    pub async fn status(&self, token: Option<&str>) -> SessionStatus {
        let now_ms = Utc::now().timestamp_millis();
        match self.lookup(token).await {
            Ok(session) if !session.is_expired_at(now_ms) => SessionStatus {
                logged_in: true,
                user_name: Some(session.user_name),
            },
            Ok(_) | Err(AuthError::SessionInvalid) => SessionStatus {
                logged_in: false,
                user_name: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed during status check");
                SessionStatus {
                    logged_in: false,
                    user_name: None,
                }
            }
        }
    }

    pub async fn get_session(&self, token: Option<&str>) -> AuthResult<AuthSession> {
        let session = self.lookup(token).await?;

        if session.is_expired_at(Utc::now().timestamp_millis()) {
            self.session_store.delete(session.session_id).await?;
            tracing::debug!(user_id = %session.user_id, "Expired session removed");
            return Err(AuthError::SessionInvalid);
        }

        Ok(session)
    }

    /// Stored session behind `token`, expired or not
    async fn lookup(&self, token: Option<&str>) -> AuthResult<AuthSession> {
        let session_id = token
            .and_then(|token| self.codec.verify(token))
            .ok_or(AuthError::SessionInvalid)?;

        self.session_store
            .get(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)
    }
}
