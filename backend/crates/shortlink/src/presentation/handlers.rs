//! HTTP Handlers
//!
//! Both routes are public. The redirect route is a single-segment
//! catch-all, so reserved names are filtered before any lookup.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::json::AppJson;

use crate::application::{CodeGenerator, ResolveUseCase, ShortLinkConfig, ShortenUseCase};
use crate::domain::repository::ShortLinkRepository;
use crate::error::{ShortLinkError, ShortLinkResult, not_found_page};
use crate::presentation::dto::{ShortenRequest, ShortenResponse};

pub struct ShortLinkAppState<R> {
    pub repo: Arc<R>,
    pub config: Arc<ShortLinkConfig>,
    pub generator: CodeGenerator,
}

impl<R> Clone for ShortLinkAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
            generator: self.generator.clone(),
        }
    }
}

impl<R> ShortLinkAppState<R> {
    /// Codes from the OS RNG, deny-list from `config`
    pub fn new(repo: Arc<R>, config: ShortLinkConfig) -> Self {
        let generator = CodeGenerator::with_os_rng(config.reserved_segments());
        Self::with_generator(repo, config, generator)
    }

    pub fn with_generator(repo: Arc<R>, config: ShortLinkConfig, generator: CodeGenerator) -> Self {
        Self {
            repo,
            config: Arc::new(config),
            generator,
        }
    }
}

/// POST /api/shorten
pub async fn shorten<R>(
    State(state): State<ShortLinkAppState<R>>,
    AppJson(req): AppJson<ShortenRequest>,
) -> ShortLinkResult<Json<ShortenResponse>>
where
    R: ShortLinkRepository + Send + Sync + 'static,
{
    let code = ShortenUseCase::new(
        state.repo.clone(),
        state.generator.clone(),
        state.config.max_attempts,
    )
    .execute(&req.url)
    .await?;

    Ok(Json(ShortenResponse {
        short_url: state.config.short_url(&code),
    }))
}

/// GET /{code}
pub async fn redirect<R>(
    State(state): State<ShortLinkAppState<R>>,
    Path(segment): Path<String>,
) -> Response
where
    R: ShortLinkRepository + Send + Sync + 'static,
{
    let resolved = ResolveUseCase::new(state.repo.clone(), state.generator.reserved().clone())
        .execute(&segment)
        .await;

    match resolved {
        Ok(destination) => match HeaderValue::from_str(destination.as_str()) {
            Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
            Err(_) => {
                ShortLinkError::InvalidDestination(destination.as_str().to_string()).into_response()
            }
        },
        Err(ShortLinkError::NotFound) => not_found_page(),
        Err(e) => e.into_response(),
    }
}
