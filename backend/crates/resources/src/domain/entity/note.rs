//! Note Entity
//!
//! Free text scratchpad. At most one per user: keyed by owner, not by id.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::owned::OwnedResource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub owner_id: UserId,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl OwnedResource for Note {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}
