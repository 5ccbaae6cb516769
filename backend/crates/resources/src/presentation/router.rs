//! Resource Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::domain::repository::{NoteRepository, TaskRepository, TileRepository};
use crate::presentation::handlers::{self, ResourceAppState};

/// Owner-scoped routes. The caller must layer session authentication on
/// top (handlers reject requests that carry no `Identity`).
pub fn resource_router<R>(repo: Arc<R>) -> Router
where
    R: TileRepository + NoteRepository + TaskRepository + Send + Sync + 'static,
{
    let state = ResourceAppState { repo };

    Router::new()
        .route(
            "/api/apps",
            get(handlers::list_tiles::<R>).post(handlers::create_tile::<R>),
        )
        .route("/api/apps/add", post(handlers::create_tile::<R>))
        .route("/api/apps/{id}", delete(handlers::delete_tile::<R>))
        .route(
            "/api/notes",
            get(handlers::get_note::<R>).post(handlers::save_note::<R>),
        )
        .route(
            "/api/todos",
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(
            "/api/todos/{id}",
            put(handlers::update_task::<R>).delete(handlers::delete_task::<R>),
        )
        .with_state(state)
}
