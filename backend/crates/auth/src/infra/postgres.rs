//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::pin::HashedPin;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{SessionStore, UserRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Marker row written by first-boot initialization
const DEFAULT_ACCOUNT_MARKER: &str = "default_account";

/// PostgreSQL-backed auth repository (users and sessions)
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (user_id, user_name, pin_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.user_name.as_str())
        .bind(user.pin_hash.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, user_name, pin_hash, created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn is_bootstrapped(&self) -> AuthResult<bool> {
        let initialized = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM bootstrap_markers WHERE marker = $1)
                OR EXISTS(SELECT 1 FROM users)
            "#,
        )
        .bind(DEFAULT_ACCOUNT_MARKER)
        .fetch_one(&self.pool)
        .await?;

        Ok(initialized)
    }

    async fn bootstrap(&self, user: &User) -> AuthResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Concurrent starters serialize on the marker's primary key.
        let marked = sqlx::query(
            r#"
            INSERT INTO bootstrap_markers (marker, created_at)
            VALUES ($1, $2)
            ON CONFLICT (marker) DO NOTHING
            "#,
        )
        .bind(DEFAULT_ACCOUNT_MARKER)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let has_users = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users)")
            .fetch_one(&mut *tx)
            .await?;

        let seeded = marked == 1 && !has_users;
        if seeded {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, user_name, pin_hash, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(user.user_id.as_uuid())
            .bind(user.user_name.as_str())
            .bind(user.pin_hash.as_phc_string())
            .bind(user.created_at)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(seeded)
    }
}

// ============================================================================
// Session Store Implementation
// ============================================================================

impl SessionStore for PgAuthRepository {
    async fn get(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, AuthSessionRow>(
            r#"
            SELECT session_id, user_id, user_name, expires_at_ms, created_at
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AuthSessionRow::into_session))
    }

    async fn put(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (session_id, user_id, user_name, expires_at_ms, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (session_id) DO UPDATE SET
                user_id = EXCLUDED.user_id,
                user_name = EXCLUDED.user_name,
                expires_at_ms = EXCLUDED.expires_at_ms
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(&session.user_name)
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn sweep_expired(&self, now_ms: i64) -> AuthResult<u64> {
        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    user_name: String,
    pin_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let user_name = UserName::new(self.user_name)
            .map_err(|e| AuthError::Internal(format!("Invalid stored user_name: {e}")))?;

        let pin_hash = HashedPin::from_phc_string(self.pin_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid stored pin_hash: {e}")))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            user_name,
            pin_hash,
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct AuthSessionRow {
    session_id: Uuid,
    user_id: Uuid,
    user_name: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl AuthSessionRow {
    fn into_session(self) -> AuthSession {
        AuthSession {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            user_name: self.user_name,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        }
    }
}
