//! Destination URL Value Object

use url::Url;

use crate::error::{ShortLinkError, ShortLinkResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// Validate a user-supplied destination. The stored text is the input
    /// byte for byte, not the parser's normalized form.
    pub fn parse(raw: &str) -> ShortLinkResult<Self> {
        if !has_http_scheme(raw) {
            return Err(ShortLinkError::Validation(
                "URL must start with http:// or https://".to_string(),
            ));
        }

        // The url parser silently strips these; a Location header cannot carry them.
        if raw.chars().any(char::is_control) {
            return Err(ShortLinkError::Validation(
                "URL must not contain control characters".to_string(),
            ));
        }

        let parsed = Url::parse(raw)
            .map_err(|e| ShortLinkError::Validation(format!("Invalid URL: {e}")))?;

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ShortLinkError::Validation("URL must have a host".to_string()));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    /// Checked again at redirect time; stored rows are not trusted.
    pub fn is_redirectable(&self) -> bool {
        has_http_scheme(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_http_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}
