//! PIN Hashing and Verification
//!
//! Login PINs are short secrets, so everything rests on the hash:
//! - Argon2id hashing (memory-hard, recommended by OWASP), PHC string format
//! - Per-hash random salt, optional application-wide pepper
//! - Zeroization of clear-text PINs
//! - A decoy hash so "unknown user" costs the same as "wrong PIN"

use std::fmt;
use std::sync::{Arc, OnceLock};

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

pub const MIN_PIN_LENGTH: usize = 4;

pub const MAX_PIN_LENGTH: usize = 64;

/// Input hashed once to build the decoy. Its value is irrelevant.
const DECOY_PIN: &str = "decoy-pin-never-matches";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinPolicyError {
    #[error("PIN must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("PIN must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("PIN cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("PIN contains invalid control characters")]
    InvalidCharacter,
}

#[derive(Debug, Error)]
pub enum PinHashError {
    #[error("PIN hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid PIN hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text PIN (Zeroized on drop)
// ============================================================================

/// Clear text PIN with automatic memory zeroization
///
/// Not `Clone`, and `Debug` is redacted.
///
/// ## Examples
/// ```rust
/// use platform::pin::ClearTextPin;
///
/// let pin = ClearTextPin::new("778877".to_string()).unwrap();
/// assert_eq!(format!("{:?}", pin), "ClearTextPin(\"[REDACTED]\")");
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPin(String);

impl ClearTextPin {
    /// Validate and normalize (NFKC) a PIN
    pub fn new(mut raw: String) -> Result<Self, PinPolicyError> {
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();

        if normalized.trim().is_empty() {
            return Err(PinPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count < MIN_PIN_LENGTH {
            return Err(PinPolicyError::TooShort {
                min: MIN_PIN_LENGTH,
                actual: char_count,
            });
        }
        if char_count > MAX_PIN_LENGTH {
            return Err(PinPolicyError::TooLong {
                max: MAX_PIN_LENGTH,
                actual: char_count,
            });
        }

        if normalized.chars().any(|ch| ch.is_control()) {
            return Err(PinPolicyError::InvalidCharacter);
        }

        Ok(Self(normalized))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPin").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hashed PIN (Safe to store)
// ============================================================================

/// Argon2id hash in PHC string format (algorithm, version, params, salt, hash)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPin {
    hash: String,
}

impl HashedPin {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PinHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PinHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPin").field("hash", &"[HASH]").finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashParams {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl HashParams {
    /// Minimum legal cost. Tests only.
    pub fn testing() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }
}

/// Hashes and verifies PINs with one fixed parameter set and pepper.
///
/// Cheap to clone; clones share the lazily built decoy hash.
#[derive(Clone)]
pub struct PinHasher {
    argon2: Argon2<'static>,
    pepper: Option<Arc<[u8]>>,
    decoy: Arc<OnceLock<Option<HashedPin>>>,
}

impl PinHasher {
    pub fn new(params: HashParams, pepper: Option<Vec<u8>>) -> Result<Self, PinHashError> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| PinHashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            pepper: pepper.map(Arc::from),
            decoy: Arc::new(OnceLock::new()),
        })
    }

    fn peppered(&self, pin: &ClearTextPin) -> Vec<u8> {
        let mut combined = pin.as_bytes().to_vec();
        if let Some(pepper) = &self.pepper {
            combined.extend_from_slice(pepper);
        }
        combined
    }

    /// Hash with a fresh random salt (128 bits)
    pub fn hash(&self, pin: &ClearTextPin) -> Result<HashedPin, PinHashError> {
        let mut input = self.peppered(pin);
        let salt = SaltString::generate(&mut OsRng);

        let result = self
            .argon2
            .hash_password(&input, &salt)
            .map(|hash| HashedPin {
                hash: hash.to_string(),
            })
            .map_err(|e| PinHashError::HashingFailed(e.to_string()));

        input.zeroize();
        result
    }

    /// Verify a PIN against a stored hash.
    ///
    /// Parameters are read from the PHC string, so hashes made with older
    /// parameters still verify. Argon2 compares in constant time.
    pub fn verify(&self, hashed: &HashedPin, pin: &ClearTextPin) -> bool {
        let parsed_hash = match PasswordHash::new(&hashed.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let mut input = self.peppered(pin);
        let valid = self.argon2.verify_password(&input, &parsed_hash).is_ok();
        input.zeroize();
        valid
    }

    /// Spend one verification's worth of work and fail.
    ///
    /// Used when the user does not exist, so callers cannot tell unknown
    /// users from wrong PINs by response time.
    /// A PIN that failed the policy passes `None` and is replaced by the
    /// decoy PIN itself.
    pub fn verify_decoy(&self, pin: Option<&ClearTextPin>) -> bool {
        let decoy = self.decoy.get_or_init(|| {
            ClearTextPin::new(DECOY_PIN.to_string())
                .ok()
                .and_then(|decoy_pin| self.hash(&decoy_pin).ok())
        });

        let Some(decoy) = decoy else {
            return false;
        };
        match pin {
            Some(pin) => {
                let _ = self.verify(decoy, pin);
            }
            None => {
                if let Ok(stand_in) = ClearTextPin::new(DECOY_PIN.to_string()) {
                    let _ = self.verify(decoy, &stand_in);
                }
            }
        }
        false
    }
}

impl fmt::Debug for PinHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PinHasher")
            .field("params", self.argon2.params())
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> PinHasher {
        PinHasher::new(HashParams::testing(), None).unwrap()
    }

    fn pin(raw: &str) -> ClearTextPin {
        ClearTextPin::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_pin_too_short() {
        let result = ClearTextPin::new("123".to_string());
        assert!(matches!(result, Err(PinPolicyError::TooShort { .. })));
    }

    #[test]
    fn test_pin_too_long() {
        let result = ClearTextPin::new("1".repeat(MAX_PIN_LENGTH + 1));
        assert!(matches!(result, Err(PinPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_pin_whitespace_only() {
        let result = ClearTextPin::new("      ".to_string());
        assert!(matches!(result, Err(PinPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_pin_control_character() {
        let result = ClearTextPin::new("12\u{0007}34".to_string());
        assert!(matches!(result, Err(PinPolicyError::InvalidCharacter)));
    }

    #[test]
    fn test_pin_nfkc_normalized() {
        // Full-width digits normalize to ASCII
        let wide = ClearTextPin::new("７７８８７７".to_string()).unwrap();
        assert_eq!(wide.as_bytes(), b"778877");
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hashed = hasher.hash(&pin("778877")).unwrap();

        assert!(hasher.verify(&hashed, &pin("778877")));
        assert!(!hasher.verify(&hashed, &pin("778878")));
    }

    #[test]
    fn test_same_pin_hashes_differ_by_salt() {
        let hasher = hasher();
        let a = hasher.hash(&pin("778877")).unwrap();
        let b = hasher.hash(&pin("778877")).unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
        assert!(a.as_phc_string().starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_with_pepper() {
        let peppered = PinHasher::new(HashParams::testing(), Some(b"pepper".to_vec())).unwrap();
        let hashed = peppered.hash(&pin("778877")).unwrap();

        assert!(peppered.verify(&hashed, &pin("778877")));
        assert!(!hasher().verify(&hashed, &pin("778877")));
    }

    #[test]
    fn test_decoy_never_matches() {
        let hasher = hasher();
        assert!(!hasher.verify_decoy(Some(&pin(DECOY_PIN))));
        assert!(!hasher.verify_decoy(Some(&pin("778877"))));
        assert!(!hasher.verify_decoy(None));
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hasher = hasher();
        let hashed = hasher.hash(&pin("778877")).unwrap();

        let restored = HashedPin::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(hasher.verify(&restored, &pin("778877")));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPin::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", pin("secret-pin"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
