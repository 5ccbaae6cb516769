//! Shorten Use Case

use std::sync::Arc;

use crate::application::generator::CodeGenerator;
use crate::domain::entity::short_link::ShortLink;
use crate::domain::repository::{InsertOutcome, ShortLinkRepository};
use crate::domain::value_object::{destination::Destination, short_code::ShortCode};
use crate::error::{ShortLinkError, ShortLinkResult};

pub struct ShortenUseCase<R>
where
    R: ShortLinkRepository,
{
    repo: Arc<R>,
    generator: CodeGenerator,
    max_attempts: u32,
}

impl<R> ShortenUseCase<R>
where
    R: ShortLinkRepository,
{
    pub fn new(repo: Arc<R>, generator: CodeGenerator, max_attempts: u32) -> Self {
        Self {
            repo,
            generator,
            max_attempts,
        }
    }

    /// Validate, then draw codes until one inserts. A taken code is never
    /// overwritten.
    pub async fn execute(&self, raw_url: &str) -> ShortLinkResult<ShortCode> {
        let destination = Destination::parse(raw_url)?;

        for attempt in 1..=self.max_attempts {
            let Some(code) = self.generator.candidate() else {
                tracing::debug!(attempt, "Drew a reserved segment, drawing again");
                continue;
            };

            let link = ShortLink::new(code, destination.clone());
            match self.repo.insert(&link).await? {
                InsertOutcome::Inserted => {
                    tracing::info!(code = %link.code, attempt, "Short link created");
                    return Ok(link.code);
                }
                InsertOutcome::CodeTaken => {
                    tracing::debug!(code = %link.code, attempt, "Short code taken, drawing again");
                }
            }
        }

        Err(ShortLinkError::GenerationExhausted(self.max_attempts))
    }
}
