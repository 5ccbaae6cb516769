//! Task Entity

use chrono::{DateTime, Utc};
use kernel::id::{TaskId, UserId};

use crate::domain::owned::OwnedResource;
use crate::domain::text::ensure_storable;
use crate::error::{ResourceError, ResourceResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Immutable after creation
    pub owner_id: UserId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl OwnedResource for Task {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

/// Validated creation payload (text is trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
}

impl NewTask {
    pub fn new(text: &str) -> ResourceResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ResourceError::Validation(
                "Task text cannot be empty".to_string(),
            ));
        }
        ensure_storable("Task text", text)?;
        Ok(Self {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_trimmed() {
        assert_eq!(NewTask::new("  buy milk \n").unwrap().text, "buy milk");
    }

    #[test]
    fn test_blank_rejected() {
        assert!(matches!(NewTask::new(""), Err(ResourceError::Validation(_))));
        assert!(matches!(NewTask::new(" \t "), Err(ResourceError::Validation(_))));
        assert!(matches!(NewTask::new("a\u{0000}b"), Err(ResourceError::Validation(_))));
    }
}
