//! In-memory Short-Link Repository

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::short_link::ShortLink;
use crate::domain::repository::{InsertOutcome, ShortLinkRepository};
use crate::domain::value_object::short_code::ShortCode;
use crate::error::ShortLinkResult;

#[derive(Clone, Debug, Default)]
pub struct MemoryShortLinkRepository {
    links: Arc<RwLock<HashMap<ShortCode, ShortLink>>>,
}

impl MemoryShortLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn insert(&self, link: &ShortLink) -> ShortLinkResult<InsertOutcome> {
        let mut links = self.links.write().await;

        if links.contains_key(&link.code) {
            return Ok(InsertOutcome::CodeTaken);
        }

        links.insert(link.code.clone(), link.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn find(&self, code: &ShortCode) -> ShortLinkResult<Option<ShortLink>> {
        Ok(self.links.read().await.get(code).cloned())
    }
}
