//! Sign In Use Case
//!
//! Verifies credentials and mints a fresh session. Any session the browser
//! already carried is destroyed first, so the token before and after
//! login always differ.

use std::sync::Arc;

use platform::pin::PinHasher;

use crate::application::config::AuthConfig;
use crate::application::credentials::CredentialVerifier;
use crate::application::token::SessionTokenCodec;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub pin: String,
    /// Token from the cookie the browser sent along, if any
    pub prior_token: Option<String>,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub user_name: String,
    pub expires_at_ms: i64,
}

/// Sign in use case
pub struct SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    credentials: CredentialVerifier<U>,
    session_store: Arc<S>,
    codec: SessionTokenCodec,
    config: Arc<AuthConfig>,
}

impl<U, S> SignInUseCase<U, S>
where
    U: UserRepository,
    S: SessionStore,
{
    pub fn new(
        user_repo: Arc<U>,
        session_store: Arc<S>,
        hasher: PinHasher,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            credentials: CredentialVerifier::new(user_repo, hasher),
            session_store,
            codec: SessionTokenCodec::new(config.session_secret),
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.user_name.is_empty() || input.pin.is_empty() {
            return Err(AuthError::Validation(
                "User name and PIN are required".to_string(),
            ));
        }

        let user = self.credentials.verify(&input.user_name, input.pin).await?;

        if let Some(prior_id) = input
            .prior_token
            .as_deref()
            .and_then(|token| self.codec.verify(token))
        {
            self.session_store.delete(prior_id).await?;
        }

        let session = AuthSession::new(&user, self.config.session_ttl_chrono());
        self.session_store.put(&session).await?;

        let session_token = self.codec.sign(session.session_id)?;

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput {
            session_token,
            user_name: session.user_name,
            expires_at_ms: session.expires_at_ms,
        })
    }
}
