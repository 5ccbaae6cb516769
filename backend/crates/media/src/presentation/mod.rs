//! Presentation Layer
//!
//! Public read-only listings for the media player.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::application::{MediaConfig, list_media};
use crate::domain::{MediaEntry, MediaKind};
use crate::error::MediaResult;

/// GET /api/music
pub async fn music(State(config): State<Arc<MediaConfig>>) -> MediaResult<Json<Vec<MediaEntry>>> {
    Ok(Json(list_media(&config, MediaKind::Audio).await?))
}

/// GET /api/videos
pub async fn videos(
    State(config): State<Arc<MediaConfig>>,
) -> MediaResult<Json<Vec<MediaEntry>>> {
    Ok(Json(list_media(&config, MediaKind::Video).await?))
}

pub fn media_router(config: MediaConfig) -> Router {
    Router::new()
        .route("/api/music", get(music))
        .route("/api/videos", get(videos))
        .with_state(Arc::new(config))
}
