//! Filesystem Access

use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{MediaEntry, MediaKind};
use crate::error::{MediaError, MediaResult};

/// Index `directory` for files of `kind`. Read-only: a missing directory
/// yields an empty list, never an error.
pub async fn index_directory(directory: &Path, kind: MediaKind) -> MediaResult<Vec<MediaEntry>> {
    let mut reader = match tokio::fs::read_dir(directory).await {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(directory = %directory.display(), "Media directory not found");
            return Ok(Vec::new());
        }
        Err(e) => return Err(MediaError::io(directory, e)),
    };

    let mut files = Vec::new();
    while let Some(entry) = reader
        .next_entry()
        .await
        .map_err(|e| MediaError::io(directory, e))?
    {
        let path = entry.path();
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(kind.extension()));

        if !matches_extension {
            continue;
        }

        let (Some(file_name), Some(stem)) = (
            path.file_name().and_then(|n| n.to_str()),
            path.file_stem().and_then(|s| s.to_str()),
        ) else {
            tracing::debug!(path = %path.display(), "Skipping non UTF-8 media file name");
            continue;
        };

        files.push((file_name.to_string(), stem.to_string()));
    }

    files.sort();

    Ok(files
        .iter()
        .enumerate()
        .map(|(id, (file_name, stem))| MediaEntry::from_file(id, kind, file_name, stem))
        .collect())
}

/// Create `directory` (and parents) if absent
pub async fn ensure_directory(directory: &Path) -> MediaResult<()> {
    if tokio::fs::try_exists(directory)
        .await
        .map_err(|e| MediaError::io(directory, e))?
    {
        return Ok(());
    }

    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|e| MediaError::io(directory, e))?;

    tracing::info!(directory = %directory.display(), "Created media directory");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let entries = index_directory(&dir.path().join("music"), MediaKind::Audio)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_filters_case_insensitively_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b - Song.MP3", "a - Tune.mp3", "clip.mp4", "notes.txt", "mp3"] {
            tokio::fs::write(dir.path().join(name), b"").await.unwrap();
        }

        let entries = index_directory(dir.path(), MediaKind::Audio).await.unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Tune", "Song"]);
        assert_eq!(entries[0].id, 0);
        assert_eq!(entries[1].id, 1);
        assert_eq!(entries[1].src, "/music/b%20-%20Song.MP3");
    }

    #[tokio::test]
    async fn test_ensure_directory_creates_once() {
        let dir = tempfile::tempdir().unwrap();
        let videos = dir.path().join("public").join("videos");

        ensure_directory(&videos).await.unwrap();
        ensure_directory(&videos).await.unwrap();
        assert!(videos.is_dir());
    }
}
