//! Bootstrap Use Case
//!
//! First-boot initialization: when the store has never been initialized
//! and holds no users, create the default account and record a marker.
//! Invoked once by the process entry point, never from a request path.
//! The marker keeps it from running again even if every user is deleted.

use std::sync::Arc;

use platform::pin::{ClearTextPin, PinHasher};

use crate::application::config::AuthConfig;
use crate::application::credentials::hash_pin;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The default account was created by this call
    Seeded,
    /// Nothing to do
    AlreadyInitialized,
}

pub struct BootstrapUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    hasher: PinHasher,
    config: Arc<AuthConfig>,
}

impl<U> BootstrapUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, hasher: PinHasher, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            hasher,
            config,
        }
    }

    pub async fn execute(&self) -> AuthResult<BootstrapOutcome> {
        if self.user_repo.is_bootstrapped().await? {
            tracing::debug!("Credential store already initialized");
            return Ok(BootstrapOutcome::AlreadyInitialized);
        }

        let user_name = UserName::new(self.config.default_user_name.clone())
            .map_err(|e| AuthError::Internal(format!("Invalid default user name: {e}")))?;
        let pin = ClearTextPin::new(self.config.default_pin.clone())
            .map_err(|e| AuthError::Internal(format!("Invalid default PIN: {e}")))?;

        let pin_hash = hash_pin(&self.hasher, pin).await?;
        let user = User::new(user_name, pin_hash);

        // The repository re-checks atomically; a concurrent starter may win.
        if !self.user_repo.bootstrap(&user).await? {
            return Ok(BootstrapOutcome::AlreadyInitialized);
        }

        tracing::warn!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            pin = %self.config.default_pin,
            "==== DEFAULT ACCOUNT CREATED: sign in and change this PIN immediately ===="
        );

        Ok(BootstrapOutcome::Seeded)
    }
}
