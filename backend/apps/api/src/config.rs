//! Process Configuration
//!
//! Read once from the environment (after `.env`) and split into the typed
//! configs each domain crate takes.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use media::MediaConfig;
use shortlink::ShortLinkConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Memory,
}

impl Backend {
    fn parse(var: &str, raw: Option<String>) -> anyhow::Result<Self> {
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(Backend::Postgres),
            Some(v) if v.eq_ignore_ascii_case("postgres") => Ok(Backend::Postgres),
            Some(v) if v.eq_ignore_ascii_case("memory") => Ok(Backend::Memory),
            Some(v) => bail!("{var} must be `postgres` or `memory`, got `{v}`"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub store_backend: Backend,
    pub session_backend: Backend,
    pub bind_addr: SocketAddr,
    /// Origins allowed to call the API with credentials
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub shortlink: ShortLinkConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = Backend::parse("STORE_BACKEND", lookup("STORE_BACKEND"))?;
        let session_backend = Backend::parse("SESSION_BACKEND", lookup("SESSION_BACKEND"))?;

        // Session rows reference users; they cannot live in a database
        // that has no users table contents.
        if store_backend == Backend::Memory && session_backend == Backend::Postgres {
            bail!("SESSION_BACKEND=postgres requires STORE_BACKEND=postgres");
        }

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());
        if store_backend == Backend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND=postgres");
        }

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:3000".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address")?;

        let frontend_origins = list(lookup("FRONTEND_ORIGINS"));

        Ok(Self {
            database_url,
            store_backend,
            session_backend,
            bind_addr,
            frontend_origins,
            auth: auth_config(&lookup)?,
            shortlink: ShortLinkConfig {
                public_base_url: lookup("PUBLIC_BASE_URL")
                    .unwrap_or_else(|| ShortLinkConfig::default().public_base_url),
                extra_reserved: list(lookup("RESERVED_SEGMENTS")),
                ..ShortLinkConfig::default()
            },
            media: MediaConfig {
                root: lookup("MEDIA_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| MediaConfig::default().root),
            },
        })
    }

    pub fn needs_database(&self) -> bool {
        self.store_backend == Backend::Postgres || self.session_backend == Backend::Postgres
    }
}

fn auth_config<F>(lookup: &F) -> anyhow::Result<AuthConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup("SESSION_SECRET") {
        Some(secret_b64) => {
            let bytes = platform::crypto::from_base64(secret_b64.trim())
                .context("SESSION_SECRET must be base64")?;
            let secret: [u8; 32] = bytes
                .try_into()
                .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes"))?;
            AuthConfig {
                session_secret: secret,
                ..AuthConfig::default()
            }
        }
        None if cfg!(debug_assertions) => {
            tracing::warn!("SESSION_SECRET not set, sessions will not survive a restart");
            AuthConfig::development()
        }
        None => bail!("SESSION_SECRET must be set in production"),
    };

    if let Some(ttl) = lookup("SESSION_TTL_SECS") {
        let secs: u64 = ttl
            .trim()
            .parse()
            .context("SESSION_TTL_SECS must be a whole number of seconds")?;
        if secs == 0 {
            bail!("SESSION_TTL_SECS must be positive");
        }
        config.session_ttl = Duration::from_secs(secs);
    }

    if let Some(secure) = lookup("COOKIE_SECURE") {
        config.cookie_secure = matches!(
            secure.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        );
    }

    Ok(config)
}

fn list(raw: Option<String>) -> Vec<String> {
    raw.map(|v| {
        v.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
