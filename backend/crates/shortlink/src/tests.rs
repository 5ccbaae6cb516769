//! Cross-layer tests for the short-link resolver (in-memory backend)

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::application::{CodeGenerator, CodeSource, ResolveUseCase, ShortenUseCase};
use crate::domain::entity::short_link::ShortLink;
use crate::domain::repository::ShortLinkRepository;
use crate::domain::value_object::{
    destination::Destination, reserved::ReservedSegments, short_code::ShortCode,
};
use crate::error::ShortLinkError;
use crate::infra::MemoryShortLinkRepository;

/// Replays a fixed byte sequence, repeating the last entry when drained
struct Scripted(Mutex<VecDeque<[u8; 4]>>);

impl Scripted {
    fn new(draws: &[[u8; 4]]) -> Arc<Self> {
        Arc::new(Self(Mutex::new(draws.iter().copied().collect())))
    }
}

impl CodeSource for Scripted {
    fn next_bytes(&self) -> [u8; 4] {
        let mut queue = self.0.lock().unwrap();
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            *queue.front().unwrap()
        }
    }
}

fn shorten_with(
    repo: &Arc<MemoryShortLinkRepository>,
    draws: &[[u8; 4]],
    reserved: ReservedSegments,
) -> ShortenUseCase<MemoryShortLinkRepository> {
    let generator = CodeGenerator::new(Scripted::new(draws), reserved);
    ShortenUseCase::new(repo.clone(), generator, 5)
}

async fn store(repo: &MemoryShortLinkRepository, code: &str, url: &str) {
    let link = ShortLink::new(ShortCode::from_db(code.to_string()), Destination::from_db(url.into()));
    repo.insert(&link).await.unwrap();
}

mod shorten_tests {
    use super::*;

    #[tokio::test]
    async fn test_shorten_then_resolve() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let generator = CodeGenerator::with_os_rng(ReservedSegments::builtin());
        let code = ShortenUseCase::new(repo.clone(), generator, 5)
            .execute("https://example.com/page")
            .await
            .unwrap();

        let destination = ResolveUseCase::new(repo, ReservedSegments::builtin())
            .execute(code.as_str())
            .await
            .unwrap();
        assert_eq!(destination.as_str(), "https://example.com/page");
    }

    #[tokio::test]
    async fn test_destination_round_trips_byte_exact() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let shorten = shorten_with(&repo, &[[1, 2, 3, 4]], ReservedSegments::builtin());

        let code = shorten.execute("https://example.com/a b ").await.unwrap();
        let destination = ResolveUseCase::new(repo, ReservedSegments::builtin())
            .execute(code.as_str())
            .await
            .unwrap();
        assert_eq!(destination.as_str(), "https://example.com/a b ");
    }

    #[tokio::test]
    async fn test_invalid_url_stores_nothing() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let shorten = shorten_with(&repo, &[[1, 2, 3, 4]], ReservedSegments::builtin());

        for raw in ["ftp://example.com", "example.com", "", "javascript:alert(1)"] {
            assert!(matches!(
                shorten.execute(raw).await,
                Err(ShortLinkError::Validation(_))
            ));
        }
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_collision_retries_without_overwriting() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        store(&repo, "01020304", "https://first.example").await;

        let code = shorten_with(
            &repo,
            &[[1, 2, 3, 4], [1, 2, 3, 4], [5, 6, 7, 8]],
            ReservedSegments::builtin(),
        )
        .execute("https://second.example")
        .await
        .unwrap();

        assert_eq!(code.as_str(), "05060708");
        let original = repo
            .find(&ShortCode::from_db("01020304".into()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(original.destination.as_str(), "https://first.example");
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_exhaustion_after_bounded_attempts() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        store(&repo, "01020304", "https://first.example").await;

        let err = shorten_with(&repo, &[[1, 2, 3, 4]], ReservedSegments::builtin())
            .execute("https://second.example")
            .await
            .unwrap_err();

        assert!(matches!(err, ShortLinkError::GenerationExhausted(5)));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_generator_skips_reserved_codes() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let reserved = ReservedSegments::with_extra(["deadbeef"]);

        let code = shorten_with(&repo, &[[0xde, 0xad, 0xbe, 0xef], [0, 0, 0, 1]], reserved)
            .execute("https://example.com")
            .await
            .unwrap();

        assert_eq!(code.as_str(), "00000001");
    }
}

mod resolve_tests {
    use super::*;

    #[tokio::test]
    async fn test_reserved_segment_never_resolves_even_if_stored() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        store(&repo, "deadbeef", "https://example.com").await;

        let resolve = ResolveUseCase::new(repo, ReservedSegments::with_extra(["deadbeef"]));
        for segment in ["deadbeef", "DEADBEEF", "api", "Login", "sw.js", "health"] {
            assert!(matches!(
                resolve.execute(segment).await,
                Err(ShortLinkError::NotFound)
            ));
        }
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_codes_are_not_found() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let resolve = ResolveUseCase::new(repo, ReservedSegments::builtin());

        for segment in ["0a1b2c3d", "nothex!!", "short"] {
            assert!(matches!(
                resolve.execute(segment).await,
                Err(ShortLinkError::NotFound)
            ));
        }
    }

    #[tokio::test]
    async fn test_stored_non_http_destination_is_refused() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        store(&repo, "0a1b2c3d", "javascript:alert(1)").await;

        let err = ResolveUseCase::new(repo, ReservedSegments::builtin())
            .execute("0a1b2c3d")
            .await
            .unwrap_err();
        assert!(matches!(err, ShortLinkError::InvalidDestination(_)));
    }
}

mod http_tests {
    use super::*;
    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::application::ShortLinkConfig;
    use crate::presentation::{ShortLinkAppState, shortlink_router};

    fn app(repo: Arc<MemoryShortLinkRepository>) -> Router {
        let config = ShortLinkConfig {
            public_base_url: "https://dash.example.com".to_string(),
            ..ShortLinkConfig::default()
        };
        shortlink_router(ShortLinkAppState::new(repo, config))
    }

    #[tokio::test]
    async fn test_shorten_returns_short_url_and_redirects() {
        let repo = Arc::new(MemoryShortLinkRepository::new());

        let res = app(repo.clone())
            .oneshot(
                Request::post("/api/shorten")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url":"https://example.com/x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let short_url = body["shortUrl"].as_str().unwrap();
        let code = short_url
            .strip_prefix("https://dash.example.com/")
            .unwrap();
        assert_eq!(code.len(), 8);

        let res = app(repo)
            .oneshot(Request::get(format!("/{code}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(res.headers()[header::LOCATION], "https://example.com/x");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let res = app(repo.clone())
            .oneshot(
                Request::post("/api/shorten")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url":"not a url"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_unknown_code_is_html_404() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        let res = app(repo)
            .oneshot(Request::get("/0a1b2c3d").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_invalid_stored_destination_is_400() {
        let repo = Arc::new(MemoryShortLinkRepository::new());
        store(&repo, "0a1b2c3d", "javascript:alert(1)").await;

        let res = app(repo)
            .oneshot(Request::get("/0a1b2c3d").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
