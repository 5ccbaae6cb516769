//! Reserved Top-Level Segments
//!
//! Names the server owns at the first path level. The resolver never looks
//! them up and the generator never hands them out.

use std::collections::HashSet;

pub const BUILTIN_RESERVED: &[&str] = &[
    "api",
    "login",
    "logout",
    "sw.js",
    "manifest.json",
    "favicon.ico",
    "images",
    "music",
    "videos",
    "css",
    "js",
    "views",
    "health",
];

/// Case-insensitive deny-list
#[derive(Debug, Clone)]
pub struct ReservedSegments {
    segments: HashSet<String>,
}

impl ReservedSegments {
    pub fn builtin() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }

    /// Built-in names plus `extra` (blank entries skipped)
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = BUILTIN_RESERVED
            .iter()
            .map(|s| s.to_string())
            .chain(
                extra
                    .into_iter()
                    .map(|s| s.as_ref().trim().to_ascii_lowercase())
                    .filter(|s| !s.is_empty()),
            )
            .collect();

        Self { segments }
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.segments.contains(&segment.to_ascii_lowercase())
    }
}

impl Default for ReservedSegments {
    fn default() -> Self {
        Self::builtin()
    }
}
