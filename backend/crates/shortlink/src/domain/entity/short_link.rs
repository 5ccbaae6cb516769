//! Short Link Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{destination::Destination, short_code::ShortCode};

/// Permanent code to destination mapping (no owner, no expiry)
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub code: ShortCode,
    pub destination: Destination,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(code: ShortCode, destination: Destination) -> Self {
        Self {
            code,
            destination,
            created_at: Utc::now(),
        }
    }
}
