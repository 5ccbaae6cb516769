//! Resolve Use Case

use std::sync::Arc;

use crate::domain::repository::ShortLinkRepository;
use crate::domain::value_object::{
    destination::Destination, reserved::ReservedSegments, short_code::ShortCode,
};
use crate::error::{ShortLinkError, ShortLinkResult};

pub struct ResolveUseCase<R>
where
    R: ShortLinkRepository,
{
    repo: Arc<R>,
    reserved: ReservedSegments,
}

impl<R> ResolveUseCase<R>
where
    R: ShortLinkRepository,
{
    pub fn new(repo: Arc<R>, reserved: ReservedSegments) -> Self {
        Self { repo, reserved }
    }

    /// Reserved segments and malformed codes are `NotFound` without a
    /// lookup. A stored destination is re-checked before it is returned.
    pub async fn execute(&self, segment: &str) -> ShortLinkResult<Destination> {
        if self.reserved.contains(segment) {
            return Err(ShortLinkError::NotFound);
        }

        let code = ShortCode::parse(segment).ok_or(ShortLinkError::NotFound)?;
        let link = self
            .repo
            .find(&code)
            .await?
            .ok_or(ShortLinkError::NotFound)?;

        if !link.destination.is_redirectable() {
            return Err(ShortLinkError::InvalidDestination(
                link.destination.as_str().to_string(),
            ));
        }

        Ok(link.destination)
    }
}
