//! Shortcut Tile Use Cases

use std::sync::Arc;

use kernel::id::TileId;
use kernel::identity::Identity;

use crate::domain::entity::tile::{NewTile, Tile};
use crate::domain::repository::TileRepository;
use crate::error::{ResourceError, ResourceResult};

/// Create input (owner comes from the session, never from the payload)
pub struct CreateTileInput {
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

pub struct TilesUseCase<R>
where
    R: TileRepository,
{
    repo: Arc<R>,
}

impl<R> TilesUseCase<R>
where
    R: TileRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, identity: &Identity) -> ResourceResult<Vec<Tile>> {
        self.repo.list_tiles(&identity.user_id).await
    }

    pub async fn create(&self, identity: &Identity, input: CreateTileInput) -> ResourceResult<Tile> {
        let new_tile = NewTile::new(&input.name, &input.url, input.icon.as_deref())?;
        let tile = self.repo.create_tile(&identity.user_id, &new_tile).await?;

        tracing::info!(user_id = %identity.user_id, tile_id = %tile.id, "Tile created");
        Ok(tile)
    }

    /// `raw_id` is the path segment; anything that is not a positive
    /// integer is simply not found.
    pub async fn delete(&self, identity: &Identity, raw_id: &str) -> ResourceResult<()> {
        let id = TileId::parse(raw_id).ok_or(ResourceError::NotFound("Shortcut"))?;

        if !self.repo.delete_tile(&identity.user_id, id).await? {
            return Err(ResourceError::NotFound("Shortcut"));
        }

        tracing::info!(user_id = %identity.user_id, tile_id = %id, "Tile deleted");
        Ok(())
    }
}
