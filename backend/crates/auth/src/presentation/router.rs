//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};

use crate::domain::repository::{SessionStore, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Login, logout and status routes for any repository implementation
pub fn auth_router<U, S>(state: AuthAppState<U, S>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    Router::new()
        .route("/login", post(handlers::login::<U, S>))
        .route(
            "/logout",
            get(handlers::logout::<U, S>).post(handlers::logout::<U, S>),
        )
        .route("/api/auth/status", get(handlers::auth_status::<U, S>))
        .with_state(state)
}
