//! PostgreSQL Short-Link Repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::short_link::ShortLink;
use crate::domain::repository::{InsertOutcome, ShortLinkRepository};
use crate::domain::value_object::{destination::Destination, short_code::ShortCode};
use crate::error::ShortLinkResult;

#[derive(Clone)]
pub struct PgShortLinkRepository {
    pool: PgPool,
}

impl PgShortLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert(&self, link: &ShortLink) -> ShortLinkResult<InsertOutcome> {
        // Zero affected rows means the code exists; the caller draws again
        let inserted = sqlx::query(
            r#"
            INSERT INTO short_links (code, url, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (code) DO NOTHING
            "#,
        )
        .bind(link.code.as_str())
        .bind(link.destination.as_str())
        .bind(link.created_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(if inserted == 1 {
            InsertOutcome::Inserted
        } else {
            InsertOutcome::CodeTaken
        })
    }

    async fn find(&self, code: &ShortCode) -> ShortLinkResult<Option<ShortLink>> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            "SELECT code, url, created_at FROM short_links WHERE code = $1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ShortLinkRow::into_link))
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    code: String,
    url: String,
    created_at: DateTime<Utc>,
}

impl ShortLinkRow {
    fn into_link(self) -> ShortLink {
        ShortLink {
            code: ShortCode::from_db(self.code),
            destination: Destination::from_db(self.url),
            created_at: self.created_at,
        }
    }
}
