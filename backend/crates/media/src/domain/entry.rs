//! Media Entry
//!
//! File names follow `Artist - Title.ext`. Without the separator the whole
//! stem is the title.

use serde::Serialize;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const DEFAULT_COVER: &str = "/images/icon-192.png";

const SEPARATOR: &str = " - ";

/// What is being indexed: which directory, which extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            MediaKind::Audio => "music",
            MediaKind::Video => "videos",
        }
    }

    /// Lowercase, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Audio => "mp3",
            MediaKind::Video => "mp4",
        }
    }

    fn artist_fallback(self) -> &'static str {
        match self {
            MediaKind::Audio => UNKNOWN_ARTIST,
            MediaKind::Video => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    pub id: usize,
    pub title: String,
    pub artist: String,
    pub src: String,
    pub cover: String,
}

impl MediaEntry {
    /// `file_name` is the full name (with extension), `stem` the name
    /// without its final extension.
    pub fn from_file(id: usize, kind: MediaKind, file_name: &str, stem: &str) -> Self {
        let (artist, title) = match stem.split_once(SEPARATOR) {
            Some((artist, rest)) => (artist.trim().to_string(), rest.trim()),
            None => (kind.artist_fallback().to_string(), stem.trim()),
        };

        let title = if title.is_empty() { UNTITLED } else { title };

        Self {
            id,
            title: title.to_string(),
            artist,
            src: format!("/{}/{}", kind.dir_name(), urlencoding::encode(file_name)),
            cover: DEFAULT_COVER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_title_split() {
        let entry = MediaEntry::from_file(0, MediaKind::Audio, "Daft Punk - One More Time.mp3", "Daft Punk - One More Time");
        assert_eq!(entry.artist, "Daft Punk");
        assert_eq!(entry.title, "One More Time");
        assert_eq!(entry.src, "/music/Daft%20Punk%20-%20One%20More%20Time.mp3");
        assert_eq!(entry.cover, DEFAULT_COVER);
    }

    #[test]
    fn test_only_first_separator_splits() {
        let entry = MediaEntry::from_file(0, MediaKind::Audio, "A - B - C.mp3", "A - B - C");
        assert_eq!(entry.artist, "A");
        assert_eq!(entry.title, "B - C");
    }

    #[test]
    fn test_fallbacks_per_kind() {
        let song = MediaEntry::from_file(1, MediaKind::Audio, "intro.mp3", "intro");
        assert_eq!(song.artist, UNKNOWN_ARTIST);
        assert_eq!(song.title, "intro");

        let clip = MediaEntry::from_file(2, MediaKind::Video, "clip.mp4", "clip");
        assert_eq!(clip.artist, "");
        assert_eq!(clip.src, "/videos/clip.mp4");
    }

    #[test]
    fn test_empty_title_is_untitled() {
        let entry = MediaEntry::from_file(0, MediaKind::Audio, "Someone - .mp3", "Someone - ");
        assert_eq!(entry.artist, "Someone");
        assert_eq!(entry.title, UNTITLED);
    }
}
