//! Short-Link Configuration

use crate::domain::value_object::{reserved::ReservedSegments, short_code::ShortCode};

/// Draws per shorten request (reserved and taken codes both count)
pub const MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ShortLinkConfig {
    /// Scheme and host prefixed to every code, e.g. `https://dash.example.com`
    pub public_base_url: String,
    /// Reserved segments beyond the built-in list
    pub extra_reserved: Vec<String>,
    pub max_attempts: u32,
}

impl Default for ShortLinkConfig {
    fn default() -> Self {
        Self {
            public_base_url: "http://localhost:3000".to_string(),
            extra_reserved: Vec::new(),
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl ShortLinkConfig {
    pub fn development() -> Self {
        Self::default()
    }

    pub fn reserved_segments(&self) -> ReservedSegments {
        ReservedSegments::with_extra(&self.extra_reserved)
    }

    pub fn short_url(&self, code: &ShortCode) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), code)
    }
}
