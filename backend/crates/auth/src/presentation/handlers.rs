//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use kernel::json::AppJson;
use platform::cookie::extract_cookie;
use platform::pin::PinHasher;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    BootstrapUseCase, CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase,
};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthStatusResponse, LoginRequest, LoginResponse};
use crate::presentation::middleware::SessionGuard;

/// Shared state for auth handlers
pub struct AuthAppState<U, S> {
    pub users: Arc<U>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
    /// Shared so the decoy hash is built once per process
    pub hasher: PinHasher,
}

impl<U, S> Clone for AuthAppState<U, S> {
    fn clone(&self) -> Self {
        Self {
            users: self.users.clone(),
            sessions: self.sessions.clone(),
            config: self.config.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<U, S> AuthAppState<U, S>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(users: Arc<U>, sessions: Arc<S>, config: AuthConfig) -> AuthResult<Self> {
        let hasher = PinHasher::new(config.hash_params, config.pin_pepper.clone())?;

        Ok(Self {
            users,
            sessions,
            config: Arc::new(config),
            hasher,
        })
    }

    /// First-boot initialization, for the process entry point
    pub fn bootstrap(&self) -> BootstrapUseCase<U> {
        BootstrapUseCase::new(self.users.clone(), self.hasher.clone(), self.config.clone())
    }

    /// State for the `require_session` middleware
    pub fn session_guard(&self) -> SessionGuard<S> {
        SessionGuard::new(self.sessions.clone(), self.config.clone())
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
    AppJson(req): AppJson<LoginRequest>,
) -> AuthResult<impl IntoResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.users.clone(),
        state.sessions.clone(),
        state.hasher.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        user_name: req.username,
        pin: req.pin.into_string(),
        prior_token: extract_cookie(&headers, &state.config.session_cookie_name),
    };

    let output = use_case.execute(input).await?;

    let cookie = state
        .config
        .cookie()
        .set_cookie_header(&output.session_token)
        .ok_or_else(|| AuthError::Internal("Session cookie is not a valid header".into()))?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
            username: output.user_name,
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// GET|POST /logout
///
/// Always clears the cookie and redirects home, whatever state the token is in.
pub async fn logout<U, S>(State(state): State<AuthAppState<U, S>>, headers: HeaderMap) -> Response
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
    if let Err(e) = use_case.execute(token.as_deref()).await {
        tracing::warn!(error = %e, "Failed to destroy session on logout");
    }

    let mut response = Redirect::to("/").into_response();
    if let Some(cookie) = state.config.cookie().delete_cookie_header() {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

// ============================================================================
// Session Status
// ============================================================================

/// GET /api/auth/status
pub async fn auth_status<U, S>(
    State(state): State<AuthAppState<U, S>>,
    headers: HeaderMap,
) -> Json<AuthStatusResponse>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let status = CheckSessionUseCase::new(state.sessions.clone(), state.config.clone())
        .status(token.as_deref())
        .await;

    Json(AuthStatusResponse {
        logged_in: status.logged_in,
        username: status.user_name,
    })
}
