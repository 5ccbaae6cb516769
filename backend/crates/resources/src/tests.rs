//! Cross-layer tests for the resource store (in-memory backend)

use std::sync::Arc;

use kernel::id::UserId;
use kernel::identity::Identity;

use crate::application::{CreateTileInput, NotesUseCase, TasksUseCase, TilesUseCase};
use crate::error::ResourceError;
use crate::infra::MemoryResourceRepository;

fn caller(name: &str) -> Identity {
    Identity::new(UserId::new(), name)
}

fn tile_input(name: &str, url: &str) -> CreateTileInput {
    CreateTileInput {
        name: name.to_string(),
        url: url.to_string(),
        icon: None,
    }
}

mod isolation_tests {
    use super::*;

    #[tokio::test]
    async fn test_tiles_are_listed_per_owner() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tiles = TilesUseCase::new(repo);
        let (alice, bob) = (caller("alice"), caller("bob"));

        tiles
            .create(&alice, tile_input("Docs", "https://docs.rs"))
            .await
            .unwrap();
        tiles
            .create(&bob, tile_input("Crates", "https://crates.io"))
            .await
            .unwrap();

        let listed = tiles.list(&alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Docs");
        assert_eq!(listed[0].owner_id, alice.user_id);
    }

    #[tokio::test]
    async fn test_foreign_tile_delete_is_not_found() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tiles = TilesUseCase::new(repo);
        let (alice, bob) = (caller("alice"), caller("bob"));

        let tile = tiles
            .create(&alice, tile_input("Docs", "https://docs.rs"))
            .await
            .unwrap();

        let err = tiles.delete(&bob, &tile.id.to_string()).await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound("Shortcut")));
        assert_eq!(tiles.list(&alice).await.unwrap().len(), 1);

        tiles.delete(&alice, &tile.id.to_string()).await.unwrap();
        assert!(tiles.list(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_foreign_task_update_and_delete_are_not_found() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tasks = TasksUseCase::new(repo);
        let (alice, bob) = (caller("alice"), caller("bob"));

        let task = tasks.create(&alice, "write tests").await.unwrap();
        let id = task.id.to_string();

        let err = tasks.set_completed(&bob, &id, true).await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound("Task")));
        let err = tasks.delete(&bob, &id).await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound("Task")));

        let untouched = tasks.list(&alice).await.unwrap();
        assert_eq!(untouched.len(), 1);
        assert!(!untouched[0].completed);
    }

    #[tokio::test]
    async fn test_malformed_ids_are_not_found() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tasks = TasksUseCase::new(repo.clone());
        let tiles = TilesUseCase::new(repo);
        let alice = caller("alice");

        for raw in ["abc", "-1", "0", "1.5", ""] {
            assert!(matches!(
                tasks.delete(&alice, raw).await,
                Err(ResourceError::NotFound(_))
            ));
            assert!(matches!(
                tiles.delete(&alice, raw).await,
                Err(ResourceError::NotFound(_))
            ));
        }
    }
}

mod note_tests {
    use super::*;

    #[tokio::test]
    async fn test_note_defaults_to_empty() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let notes = NotesUseCase::new(repo);

        assert_eq!(notes.content(&caller("alice")).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_note_save_overwrites_single_row() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let notes = NotesUseCase::new(repo.clone());
        let (alice, bob) = (caller("alice"), caller("bob"));

        notes.save(&alice, "first").await.unwrap();
        notes.save(&alice, "second").await.unwrap();
        notes.save(&bob, "bob's").await.unwrap();

        assert_eq!(notes.content(&alice).await.unwrap(), "second");
        assert_eq!(notes.content(&bob).await.unwrap(), "bob's");
        assert_eq!(repo.note_count().await, 2);
    }

    #[tokio::test]
    async fn test_note_with_nul_is_rejected() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let notes = NotesUseCase::new(repo.clone());
        let alice = caller("alice");

        let result = notes.save(&alice, "before\u{0000}after").await;
        assert!(matches!(result, Err(ResourceError::Validation(_))));
        assert_eq!(repo.note_count().await, 0);
    }
}

mod task_tests {
    use super::*;

    #[tokio::test]
    async fn test_task_lifecycle() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tasks = TasksUseCase::new(repo);
        let alice = caller("alice");

        let task = tasks.create(&alice, "  buy milk  ").await.unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);

        let done = tasks
            .set_completed(&alice, &task.id.to_string(), true)
            .await
            .unwrap();
        assert!(done.completed);
        assert_eq!(done.id, task.id);

        tasks.delete(&alice, &task.id.to_string()).await.unwrap();
        assert!(tasks.list(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_task_is_rejected() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let tasks = TasksUseCase::new(repo);

        assert!(matches!(
            tasks.create(&caller("alice"), "   ").await,
            Err(ResourceError::Validation(_))
        ));
    }
}

mod http_tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::{Extension, Router};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::presentation::resource_router;

    fn app(repo: Arc<MemoryResourceRepository>, identity: Identity) -> Router {
        resource_router(repo).layer(Extension(identity))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if body.is_some() {
            req = req.header("content-type", "application/json");
        }
        let req = req
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_missing_identity_is_unauthorized() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let res = resource_router(repo)
            .oneshot(Request::get("/api/todos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_note_with_nul_is_validation_failure() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let (status, body) = send(
            app(repo, caller("alice")),
            "POST",
            "/api/notes",
            Some(r#"{"content":"a\u0000b"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILURE");
    }

    #[tokio::test]
    async fn test_create_tile_ignores_owner_in_payload() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let alice = caller("alice");
        let bob = caller("bob");
        let payload = format!(
            r#"{{"name":"Docs","url":"https://docs.rs","owner":"{}"}}"#,
            bob.user_id
        );

        let (status, body) = send(
            app(repo.clone(), alice.clone()),
            "POST",
            "/api/apps/add",
            Some(&payload),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Shortcut added");
        assert_eq!(body["data"]["icon"], "fas fa-globe");

        let (_, listed) = send(app(repo.clone(), bob), "GET", "/api/apps", None).await;
        assert_eq!(listed["data"].as_array().unwrap().len(), 0);

        let (_, listed) = send(app(repo, alice), "GET", "/api/apps", None).await;
        assert_eq!(listed["data"][0]["name"], "Docs");
    }

    #[tokio::test]
    async fn test_invalid_tile_url_is_bad_request() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let (status, _) = send(
            app(repo, caller("alice")),
            "POST",
            "/api/apps",
            Some(r#"{"name":"Bad","url":"ftp://example.com"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_note_round_trip() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let alice = caller("alice");

        let (status, body) = send(
            app(repo.clone(), alice.clone()),
            "POST",
            "/api/notes",
            Some(r#"{"content":"remember"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Note saved");

        let (_, body) = send(app(repo, alice), "GET", "/api/notes", None).await;
        assert_eq!(body["content"], "remember");
    }

    #[tokio::test]
    async fn test_task_routes() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let alice = caller("alice");

        let (status, created) = send(
            app(repo.clone(), alice.clone()),
            "POST",
            "/api/todos",
            Some(r#"{"task":"ship it"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["data"]["id"].as_i64().unwrap();

        let (status, updated) = send(
            app(repo.clone(), alice.clone()),
            "PUT",
            &format!("/api/todos/{id}"),
            Some(r#"{"completed":true}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["data"]["completed"], true);

        let (status, _) = send(
            app(repo.clone(), caller("mallory")),
            "DELETE",
            &format!("/api/todos/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(
            app(repo, alice),
            "DELETE",
            &format!("/api/todos/{id}"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Task deleted");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let repo = Arc::new(MemoryResourceRepository::new());
        let (status, _) = send(
            app(repo, caller("alice")),
            "DELETE",
            "/api/apps/not-a-number",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
