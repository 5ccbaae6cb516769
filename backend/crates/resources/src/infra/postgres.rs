//! PostgreSQL Repository Implementations
//!
//! Every mutation is one statement carrying `owner_id = $n`, so the
//! ownership check and the write cannot be separated by another request.

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, TileId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::note::Note;
use crate::domain::entity::task::{NewTask, Task};
use crate::domain::entity::tile::{NewTile, Tile};
use crate::domain::repository::{NoteRepository, TaskRepository, TileRepository};
use crate::error::ResourceResult;

/// PostgreSQL-backed store for tiles, notes and tasks
#[derive(Clone)]
pub struct PgResourceRepository {
    pool: PgPool,
}

impl PgResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Tiles
// ============================================================================

impl TileRepository for PgResourceRepository {
    async fn list_tiles(&self, owner: &UserId) -> ResourceResult<Vec<Tile>> {
        let rows = sqlx::query_as::<_, TileRow>(
            r#"
            SELECT id, owner_id, name, url, icon, created_at
            FROM user_tiles
            WHERE owner_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TileRow::into_tile).collect())
    }

    async fn create_tile(&self, owner: &UserId, tile: &NewTile) -> ResourceResult<Tile> {
        let row = sqlx::query_as::<_, TileRow>(
            r#"
            INSERT INTO user_tiles (owner_id, name, url, icon)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, name, url, icon, created_at
            "#,
        )
        .bind(owner.as_uuid())
        .bind(&tile.name)
        .bind(&tile.url)
        .bind(&tile.icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_tile())
    }

    async fn delete_tile(&self, owner: &UserId, id: TileId) -> ResourceResult<bool> {
        let deleted = sqlx::query("DELETE FROM user_tiles WHERE id = $1 AND owner_id = $2")
            .bind(id.get())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Notes
// ============================================================================

impl NoteRepository for PgResourceRepository {
    async fn find_note(&self, owner: &UserId) -> ResourceResult<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(
            "SELECT owner_id, content, updated_at FROM user_notes WHERE owner_id = $1",
        )
        .bind(owner.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(NoteRow::into_note))
    }

    async fn save_note(&self, owner: &UserId, content: &str) -> ResourceResult<Note> {
        // owner_id is the primary key: the conflict arm is the overwrite.
        let row = sqlx::query_as::<_, NoteRow>(
            r#"
            INSERT INTO user_notes (owner_id, content, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (owner_id) DO UPDATE SET
                content = EXCLUDED.content,
                updated_at = EXCLUDED.updated_at
            RETURNING owner_id, content, updated_at
            "#,
        )
        .bind(owner.as_uuid())
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_note())
    }
}

// ============================================================================
// Tasks
// ============================================================================

impl TaskRepository for PgResourceRepository {
    async fn list_tasks(&self, owner: &UserId) -> ResourceResult<Vec<Task>> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, owner_id, task, completed, created_at
            FROM user_tasks
            WHERE owner_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(owner.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TaskRow::into_task).collect())
    }

    async fn create_task(&self, owner: &UserId, task: &NewTask) -> ResourceResult<Task> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            INSERT INTO user_tasks (owner_id, task)
            VALUES ($1, $2)
            RETURNING id, owner_id, task, completed, created_at
            "#,
        )
        .bind(owner.as_uuid())
        .bind(&task.text)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_task())
    }

    async fn set_task_completed(
        &self,
        owner: &UserId,
        id: TaskId,
        completed: bool,
    ) -> ResourceResult<Option<Task>> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE user_tasks SET completed = $3
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, task, completed, created_at
            "#,
        )
        .bind(id.get())
        .bind(owner.as_uuid())
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TaskRow::into_task))
    }

    async fn delete_task(&self, owner: &UserId, id: TaskId) -> ResourceResult<bool> {
        let deleted = sqlx::query("DELETE FROM user_tasks WHERE id = $1 AND owner_id = $2")
            .bind(id.get())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted == 1)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TileRow {
    id: i64,
    owner_id: Uuid,
    name: String,
    url: String,
    icon: String,
    created_at: DateTime<Utc>,
}

impl TileRow {
    fn into_tile(self) -> Tile {
        Tile {
            id: TileId::new(self.id),
            owner_id: UserId::from_uuid(self.owner_id),
            name: self.name,
            url: self.url,
            icon: self.icon,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    owner_id: Uuid,
    content: String,
    updated_at: DateTime<Utc>,
}

impl NoteRow {
    fn into_note(self) -> Note {
        Note {
            owner_id: UserId::from_uuid(self.owner_id),
            content: self.content,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: i64,
    owner_id: Uuid,
    task: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TaskRow {
    fn into_task(self) -> Task {
        Task {
            id: TaskId::new(self.id),
            owner_id: UserId::from_uuid(self.owner_id),
            text: self.task,
            completed: self.completed,
            created_at: self.created_at,
        }
    }
}
