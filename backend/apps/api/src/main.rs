//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use api::{AppConfig, AppState, Backend, build_router};
use auth::{
    BootstrapOutcome, MemorySessionStore, MemoryUserRepository, PgAuthRepository, SessionStore,
    UserRepository,
};
use resources::{
    MemoryResourceRepository, NoteRepository, PgResourceRepository, TaskRepository,
    TileRepository,
};
use shortlink::{MemoryShortLinkRepository, PgShortLinkRepository, ShortLinkRepository};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "api=info,auth=info,resources=info,shortlink=info,media=info,tower_http=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = if config.needs_database() {
        Some(connect(&config).await?)
    } else {
        None
    };

    tracing::info!(
        store_backend = ?config.store_backend,
        session_backend = ?config.session_backend,
        "Backends selected"
    );

    match (config.store_backend, config.session_backend, pool) {
        (Backend::Postgres, Backend::Postgres, Some(pool)) => {
            let pg_auth = Arc::new(PgAuthRepository::new(pool.clone()));
            serve(
                config,
                pg_auth.clone(),
                pg_auth,
                Arc::new(PgResourceRepository::new(pool.clone())),
                Arc::new(PgShortLinkRepository::new(pool)),
            )
            .await
        }
        (Backend::Postgres, Backend::Memory, Some(pool)) => {
            serve(
                config,
                Arc::new(PgAuthRepository::new(pool.clone())),
                Arc::new(MemorySessionStore::new()),
                Arc::new(PgResourceRepository::new(pool.clone())),
                Arc::new(PgShortLinkRepository::new(pool)),
            )
            .await
        }
        (Backend::Memory, Backend::Memory, _) => {
            tracing::warn!("STORE_BACKEND=memory: all data is lost on restart");
            serve(
                config,
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemorySessionStore::new()),
                Arc::new(MemoryResourceRepository::new()),
                Arc::new(MemoryShortLinkRepository::new()),
            )
            .await
        }
        (store, sessions, _) => {
            anyhow::bail!("Unsupported backend combination: store={store:?}, sessions={sessions:?}")
        }
    }
}

async fn connect(config: &AppConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set in environment")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    Ok(pool)
}

async fn serve<U, S, R, L>(
    config: AppConfig,
    users: Arc<U>,
    sessions: Arc<S>,
    resources: Arc<R>,
    links: Arc<L>,
) -> anyhow::Result<()>
where
    U: UserRepository + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
    R: TileRepository + NoteRepository + TaskRepository + Send + Sync + 'static,
    L: ShortLinkRepository + Send + Sync + 'static,
{
    // Startup cleanup: remove expired sessions
    // Errors here should not prevent server startup
    let now_ms = chrono::Utc::now().timestamp_millis();
    match sessions.sweep_expired(now_ms).await {
        Ok(sessions_deleted) => {
            tracing::info!(sessions_deleted, "Auth session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Auth session cleanup failed, continuing anyway");
        }
    }

    let state = AppState::new(&config, users, sessions, resources, links)?;

    match state.auth.bootstrap().execute().await? {
        BootstrapOutcome::Seeded => tracing::info!("Default account created"),
        BootstrapOutcome::AlreadyInitialized => tracing::debug!("Bootstrap already done"),
    }

    let app = build_router(state, &config);

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
