//! Short Code Value Object
//!
//! Four random bytes rendered as eight lowercase hex characters.

use std::fmt;

/// Random bytes per code
pub const CODE_BYTES: usize = 4;

/// Rendered length in characters
pub const CODE_LEN: usize = CODE_BYTES * 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

impl ShortCode {
    pub fn from_bytes(bytes: [u8; CODE_BYTES]) -> Self {
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Accepts only the exact generated shape; anything else can never be a
    /// stored code and is rejected before touching storage.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == CODE_LEN
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        well_formed.then(|| Self(raw.to_string()))
    }

    /// Reconstitute from a database row (no validation)
    pub fn from_db(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_is_lowercase_hex() {
        let code = ShortCode::from_bytes([0xde, 0xad, 0x0b, 0xef]);
        assert_eq!(code.as_str(), "dead0bef");
    }

    #[test]
    fn test_parse_accepts_generated_shape_only() {
        assert!(ShortCode::parse("0a1b2c3d").is_some());
        assert!(ShortCode::parse("0A1B2C3D").is_none());
        assert!(ShortCode::parse("0a1b2c3").is_none());
        assert!(ShortCode::parse("0a1b2c3d4").is_none());
        assert!(ShortCode::parse("login").is_none());
        assert!(ShortCode::parse("zzzzzzzz").is_none());
    }
}
