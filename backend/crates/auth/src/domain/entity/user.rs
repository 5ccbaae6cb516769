//! User Entity
//!
//! A person who can sign in. Users are created by bootstrap (or an
//! administrative path) and never deleted here.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::pin::HashedPin;

use crate::domain::value_object::user_name::UserName;

#[derive(Debug, Clone)]
pub struct User {
    /// Immutable identifier (UUID v4)
    pub user_id: UserId,
    /// Unique, case-sensitive display name
    pub user_name: UserName,
    /// Argon2id PHC string
    pub pin_hash: HashedPin,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, pin_hash: HashedPin) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            pin_hash,
            created_at: Utc::now(),
        }
    }
}
