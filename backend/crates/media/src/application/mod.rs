//! Application Layer

use std::path::{Path, PathBuf};

use crate::domain::{MediaEntry, MediaKind};
use crate::error::MediaResult;
use crate::infra::fs;

#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Parent of `music/` and `videos/`
    pub root: PathBuf,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

impl MediaConfig {
    pub fn development() -> Self {
        Self::default()
    }

    pub fn directory(&self, kind: MediaKind) -> PathBuf {
        self.root.join(kind.dir_name())
    }
}

/// Listing for the player endpoints: create the directory on first use,
/// then index it.
pub async fn list_media(config: &MediaConfig, kind: MediaKind) -> MediaResult<Vec<MediaEntry>> {
    let directory = config.directory(kind);
    fs::ensure_directory(&directory).await?;

    let entries = fs::index_directory(&directory, kind).await?;
    tracing::debug!(directory = %directory.display(), count = entries.len(), "Media indexed");
    Ok(entries)
}

/// Read-only index of an arbitrary directory
pub async fn index(directory: &Path, kind: MediaKind) -> MediaResult<Vec<MediaEntry>> {
    fs::index_directory(directory, kind).await
}
