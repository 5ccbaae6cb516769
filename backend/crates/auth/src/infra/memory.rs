//! In-memory Repository Implementations
//!
//! Process-local backends for tests and `STORE_BACKEND=memory` /
//! `SESSION_BACKEND=memory`. Clones share state. Locks are held only for
//! the map operation itself.

use std::collections::HashMap;
use std::sync::Arc;

use kernel::id::UserId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Default)]
struct UserTable {
    users: HashMap<UserId, User>,
    bootstrapped: bool,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryUserRepository {
    inner: Arc<RwLock<UserTable>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrative removal (the login flow never deletes users)
    pub async fn remove(&self, user_id: &UserId) -> bool {
        self.inner.write().await.users.remove(user_id).is_some()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.users.len()
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut table = self.inner.write().await;

        if table.users.values().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::Validation("User name already exists".to_string()));
        }

        table.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn is_bootstrapped(&self) -> AuthResult<bool> {
        let table = self.inner.read().await;
        Ok(table.bootstrapped || !table.users.is_empty())
    }

    async fn bootstrap(&self, user: &User) -> AuthResult<bool> {
        let mut table = self.inner.write().await;

        let first = !table.bootstrapped;
        table.bootstrapped = true;

        if first && table.users.is_empty() {
            table.users.insert(user.user_id, user.clone());
            return Ok(true);
        }
        Ok(false)
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, AuthSession>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        Ok(self.sessions.read().await.get(&session_id).cloned())
    }

    async fn put(&self, session: &AuthSession) -> AuthResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        self.sessions.write().await.remove(&session_id);
        Ok(())
    }

    async fn sweep_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now_ms));
        let deleted = (before - sessions.len()) as u64;

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");
        Ok(deleted)
    }
}
