//! Credential Verification
//!
//! Looks a user up by exact name and checks the PIN. Unknown users still
//! pay one Argon2 verification (against the decoy hash), so both failure
//! paths cost the same. Hashing runs on the blocking pool.

use std::sync::Arc;

use platform::pin::{ClearTextPin, HashedPin, PinHasher};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

pub struct CredentialVerifier<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    hasher: PinHasher,
}

impl<U> CredentialVerifier<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, hasher: PinHasher) -> Self {
        Self { user_repo, hasher }
    }

    /// `UserNotFound` and `InvalidCredentials` stay distinct here; the
    /// presentation layer renders them identically.
    ///
    /// The user is resolved before the PIN policy is applied, so an unknown
    /// user is always `UserNotFound` whatever the PIN looks like.
    pub async fn verify(&self, user_name: &str, raw_pin: String) -> AuthResult<User> {
        let user = match UserName::new(user_name) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };
        let pin = ClearTextPin::new(raw_pin).ok();

        let Some(user) = user else {
            self.burn_decoy(pin).await?;
            return Err(AuthError::UserNotFound);
        };

        let Some(pin) = pin else {
            self.burn_decoy(None).await?;
            return Err(AuthError::InvalidCredentials);
        };

        if !self.check(user.pin_hash.clone(), pin).await? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn check(&self, hash: HashedPin, pin: ClearTextPin) -> AuthResult<bool> {
        let hasher = self.hasher.clone();
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&hash, &pin)).await?;
        Ok(valid)
    }

    async fn burn_decoy(&self, pin: Option<ClearTextPin>) -> AuthResult<()> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.verify_decoy(pin.as_ref())).await?;
        Ok(())
    }
}

/// Hash a PIN on the blocking pool
pub async fn hash_pin(hasher: &PinHasher, pin: ClearTextPin) -> AuthResult<HashedPin> {
    let hasher = hasher.clone();
    let hashed = tokio::task::spawn_blocking(move || hasher.hash(&pin)).await??;
    Ok(hashed)
}
