//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::SessionStore;
use crate::error::AuthError;

/// Middleware state
pub struct SessionGuard<S> {
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SessionGuard<S> {
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }
}

impl<S> Clone for SessionGuard<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: self.sessions.clone(),
            config: self.config.clone(),
        }
    }
}

/// Middleware that requires a valid session.
///
/// On success the caller's `kernel::identity::Identity` is placed in the
/// request extensions. Otherwise 401 with `X-Auth-Required: true`.
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(
///     auth_state.session_guard(),
///     require_session::<S>,
/// ))
/// ```
pub async fn require_session<S>(
    State(guard): State<SessionGuard<S>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError>
where
    S: SessionStore + Send + Sync + 'static,
{
    let token = extract_cookie(req.headers(), &guard.config.session_cookie_name);

    let identity = CheckSessionUseCase::new(guard.sessions.clone(), guard.config.clone())
        .authenticate(token.as_deref())
        .await?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
