//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::cookie::CookieConfig;
use platform::pin::HashParams;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Account created on first boot. A documented weakness: operators are
/// told to change the PIN.
pub const DEFAULT_USER_NAME: &str = "admin";
pub const DEFAULT_PIN: &str = "778877";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session cookie name
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Fixed absolute session lifetime (24 hours)
    pub session_ttl: Duration,
    /// Whether to mark the cookie Secure
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// PIN pepper (optional, application-wide secret)
    pub pin_pepper: Option<Vec<u8>>,
    /// Argon2id cost
    pub hash_params: HashParams,
    pub default_user_name: String,
    pub default_pin: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: "dashboard_session".to_string(),
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(24 * 3600),
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
            pin_pepper: None,
            hash_params: HashParams::default(),
            default_user_name: DEFAULT_USER_NAME.to_string(),
            default_pin: DEFAULT_PIN.to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Cheapest Argon2 parameters; never use outside tests
    pub fn testing() -> Self {
        Self {
            hash_params: HashParams::testing(),
            ..Self::with_random_secret()
        }
    }

    /// Get session TTL in milliseconds
    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.session_ttl_ms())
    }

    pub fn cookie(&self) -> CookieConfig {
        CookieConfig {
            same_site: self.cookie_same_site,
            ..CookieConfig::session(
                self.session_cookie_name.clone(),
                self.cookie_secure,
                self.session_ttl.as_secs() as i64,
            )
        }
    }

    /// Get PIN pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.pin_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.session_cookie_name, "dashboard_session");
        assert_eq!(config.session_ttl_ms(), 86_400_000);
        assert!(!config.cookie_secure);
        assert_eq!(config.default_user_name, "admin");
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
    }

    #[test]
    fn test_cookie_uses_ttl() {
        let cookie = AuthConfig::default().cookie().build_set_cookie("t");
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.starts_with("dashboard_session=t"));
    }
}
