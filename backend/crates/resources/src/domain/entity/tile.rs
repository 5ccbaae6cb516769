//! Shortcut Tile Entity
//!
//! A named link on the dashboard's app grid.

use chrono::{DateTime, Utc};
use kernel::id::{TileId, UserId};

use crate::domain::owned::OwnedResource;
use crate::domain::text::ensure_storable;
use crate::error::{ResourceError, ResourceResult};

/// Font Awesome class used when the caller gives no icon
pub const DEFAULT_TILE_ICON: &str = "fas fa-globe";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    /// Immutable after creation
    pub owner_id: UserId,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for Tile {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

/// Validated creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTile {
    pub name: String,
    pub url: String,
    pub icon: String,
}

impl NewTile {
    pub fn new(name: &str, url: &str, icon: Option<&str>) -> ResourceResult<Self> {
        let name = name.trim();
        let url = url.trim();

        if name.is_empty() {
            return Err(ResourceError::Validation("Name is required".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ResourceError::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        let icon = icon
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_TILE_ICON);

        ensure_storable("Name", name)?;
        ensure_storable("URL", url)?;
        ensure_storable("Icon", icon)?;

        Ok(Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        })
    }
}
