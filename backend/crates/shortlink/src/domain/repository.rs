//! Repository Traits

use crate::domain::entity::short_link::ShortLink;
use crate::domain::value_object::short_code::ShortCode;
use crate::error::ShortLinkResult;

/// Result of an insert that never overwrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The code already maps to something; draw another
    CodeTaken,
}

#[trait_variant::make(ShortLinkRepository: Send)]
pub trait LocalShortLinkRepository {
    async fn insert(&self, link: &ShortLink) -> ShortLinkResult<InsertOutcome>;

    async fn find(&self, code: &ShortCode) -> ShortLinkResult<Option<ShortLink>>;
}
