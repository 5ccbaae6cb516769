//! Router Assembly
//!
//! Generic over every repository so the same wiring serves PostgreSQL,
//! in-memory and mixed backends.

use std::sync::Arc;

use auth::{AuthAppState, SessionStore, UserRepository, auth_router, require_session};
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use media::{MediaKind, media_router};
use resources::{NoteRepository, TaskRepository, TileRepository, resource_router};
use serde::Serialize;
use shortlink::{ShortLinkAppState, ShortLinkRepository, not_found_page, shortlink_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Everything the router needs, already constructed
pub struct AppState<U, S, R, L> {
    pub auth: AuthAppState<U, S>,
    pub resources: Arc<R>,
    pub shortlinks: ShortLinkAppState<L>,
}

impl<U, S, R, L> AppState<U, S, R, L>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
    R: TileRepository + NoteRepository + TaskRepository + Send + Sync + 'static,
    L: ShortLinkRepository + Send + Sync + 'static,
{
    pub fn new(
        config: &AppConfig,
        users: Arc<U>,
        sessions: Arc<S>,
        resources: Arc<R>,
        links: Arc<L>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            auth: AuthAppState::new(users, sessions, config.auth.clone())?,
            resources,
            shortlinks: ShortLinkAppState::new(links, config.shortlink.clone()),
        })
    }
}

pub fn build_router<U, S, R, L>(state: AppState<U, S, R, L>, config: &AppConfig) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
    R: TileRepository + NoteRepository + TaskRepository + Send + Sync + 'static,
    L: ShortLinkRepository + Send + Sync + 'static,
{
    let protected = resource_router(state.resources).route_layer(middleware::from_fn_with_state(
        state.auth.session_guard(),
        require_session::<S>,
    ));

    Router::new()
        .route("/health", get(health))
        .merge(auth_router(state.auth))
        .merge(protected)
        .merge(media_router(config.media.clone()))
        .nest_service(
            "/music",
            ServeDir::new(config.media.directory(MediaKind::Audio)),
        )
        .nest_service(
            "/videos",
            ServeDir::new(config.media.directory(MediaKind::Video)),
        )
        // Single-segment catch-all; static routes above take precedence
        .merge(shortlink_router(state.shortlinks))
        .fallback(|| async { not_found_page() })
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true)
}
