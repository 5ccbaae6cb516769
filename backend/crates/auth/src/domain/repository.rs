//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user (administrative path)
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact (case-sensitive) user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Whether first-boot initialization has already happened
    /// (the marker exists, or any user exists)
    async fn is_bootstrapped(&self) -> AuthResult<bool>;

    /// Atomically record the bootstrap marker and insert `user` when the
    /// store has never been initialized and holds no users.
    ///
    /// Returns `true` only for the call that actually inserted the account.
    async fn bootstrap(&self, user: &User) -> AuthResult<bool>;
}

/// Session store trait
///
/// Interchangeable backends (database table, in-process map). Every call
/// must observe the effects of earlier calls on any handle to the same store.
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    async fn put(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session. Deleting an unknown id is not an error.
    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Remove every session expired at `now_ms`
    async fn sweep_expired(&self, now_ms: i64) -> AuthResult<u64>;
}
