//! Note Use Cases
//!
//! One note per user. Saving is an upsert keyed by owner, enforced by
//! storage rather than by check-then-insert.

use std::sync::Arc;

use kernel::identity::Identity;

use crate::domain::repository::NoteRepository;
use crate::domain::text::ensure_storable;
use crate::error::ResourceResult;

pub struct NotesUseCase<R>
where
    R: NoteRepository,
{
    repo: Arc<R>,
}

impl<R> NotesUseCase<R>
where
    R: NoteRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Current note body, empty when none was ever saved
    pub async fn content(&self, identity: &Identity) -> ResourceResult<String> {
        Ok(self
            .repo
            .find_note(&identity.user_id)
            .await?
            .map(|note| note.content)
            .unwrap_or_default())
    }

    pub async fn save(&self, identity: &Identity, content: &str) -> ResourceResult<()> {
        ensure_storable("Note", content)?;
        self.repo.save_note(&identity.user_id, content).await?;

        tracing::debug!(user_id = %identity.user_id, bytes = content.len(), "Note saved");
        Ok(())
    }
}
