//! Text fields shared by every resource kind

use crate::error::{ResourceError, ResourceResult};

/// Reject NUL characters, which PostgreSQL `TEXT` cannot hold.
pub fn ensure_storable(field: &str, value: &str) -> ResourceResult<()> {
    if value.contains('\0') {
        return Err(ResourceError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}
