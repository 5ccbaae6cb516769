//! Short-Link Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::ShortLinkRepository;
use crate::presentation::handlers::{self, ShortLinkAppState};

/// `POST /api/shorten` and the `GET /{code}` catch-all. Merge this after
/// the static routes; the catch-all still refuses reserved names itself.
pub fn shortlink_router<R>(state: ShortLinkAppState<R>) -> Router
where
    R: ShortLinkRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/api/shorten", post(handlers::shorten::<R>))
        .route("/{code}", get(handlers::redirect::<R>))
        .with_state(state)
}
