//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum: the service-wide failure taxonomy and its
//! mapping onto HTTP status codes.

use serde::Serialize;

/// Failure taxonomy shared by every domain crate.
///
/// The serialized form (`SCREAMING_SNAKE_CASE`) is the machine-checkable
/// `code` returned in error bodies, so clients can branch on it without
/// parsing messages.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - input has the wrong shape or violates a field rule
    ValidationFailure,
    /// 401 - no session, or the session expired
    Unauthenticated,
    /// 401 - login rejected (unknown user or wrong PIN, merged on purpose)
    InvalidCredentials,
    /// 404 - absent, or owned by someone else
    NotFound,
    /// 500 - short-code generation ran out of attempts
    GenerationExhausted,
    /// 500 - persistence layer failed
    StorageFailure,
    /// 500 - anything else that is our fault
    Internal,
    /// 503 - database unreachable or pool exhausted
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::ValidationFailure.status_code(), 400);
    /// assert_eq!(ErrorKind::StorageFailure.status_code(), 500);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::ValidationFailure => 400,
            ErrorKind::Unauthenticated | ErrorKind::InvalidCredentials => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::GenerationExhausted | ErrorKind::StorageFailure | ErrorKind::Internal => {
                500
            }
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase of the mapped status
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailure => "Bad Request",
            ErrorKind::Unauthenticated | ErrorKind::InvalidCredentials => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::GenerationExhausted | ErrorKind::StorageFailure | ErrorKind::Internal => {
                "Internal Server Error"
            }
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Machine-checkable code, identical to the serde representation
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailure => "VALIDATION_FAILURE",
            ErrorKind::Unauthenticated => "UNAUTHENTICATED",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::GenerationExhausted => "GENERATION_EXHAUSTED",
            ErrorKind::StorageFailure => "STORAGE_FAILURE",
            ErrorKind::Internal => "INTERNAL",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// 5xx kinds. Their details stay in the server log.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::ValidationFailure.status_code(), 400);
        assert_eq!(ErrorKind::Unauthenticated.status_code(), 401);
        assert_eq!(ErrorKind::InvalidCredentials.status_code(), 401);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::GenerationExhausted.status_code(), 500);
        assert_eq!(ErrorKind::StorageFailure.status_code(), 500);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_code_matches_serde() {
        for kind in [
            ErrorKind::ValidationFailure,
            ErrorKind::Unauthenticated,
            ErrorKind::InvalidCredentials,
            ErrorKind::NotFound,
            ErrorKind::GenerationExhausted,
            ErrorKind::StorageFailure,
            ErrorKind::Internal,
            ErrorKind::ServiceUnavailable,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.code()));
        }
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::ValidationFailure.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::GenerationExhausted.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
    }
}
