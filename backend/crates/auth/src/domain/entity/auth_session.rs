//! Auth Session Entity
//!
//! Server-side state behind a session cookie. Expiry is absolute: it is
//! fixed at creation and never extended by use.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use kernel::identity::Identity;
use uuid::Uuid;

use crate::domain::entity::user::User;

/// Auth session entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Session ID (UUID v4), the signed part of the cookie token
    pub session_id: Uuid,
    pub user_id: UserId,
    /// Display name captured at login
    pub user_name: String,
    /// Absolute expiry (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a session for `user`, expiring `ttl` from now
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user: &User, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id: user.user_id,
            user_name: user.user_name.as_str().to_string(),
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
        }
    }

    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    pub fn identity(&self) -> Identity {
        Identity::new(self.user_id, self.user_name.clone())
    }
}
