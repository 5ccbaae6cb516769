//! Session Token Codec
//!
//! Cookie value format: `<session uuid>.<base64url HMAC-SHA256(session uuid)>`.
//! A token whose signature does not verify is treated as absent, so forged
//! or tampered cookies never reach the session store.

use hmac::{Hmac, Mac};
use platform::crypto::{from_base64_url, to_base64_url};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

#[derive(Clone)]
pub struct SessionTokenCodec {
    secret: [u8; 32],
}

impl SessionTokenCodec {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    fn mac(&self) -> AuthResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| AuthError::Internal(format!("HMAC key rejected: {e}")))
    }

    /// Generate signed session token
    pub fn sign(&self, session_id: Uuid) -> AuthResult<String> {
        let session_id = session_id.to_string();

        let mut mac = self.mac()?;
        mac.update(session_id.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!("{}.{}", session_id, to_base64_url(&signature)))
    }

    /// Parse and verify a session token. `None` for anything not issued
    /// with this secret.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        let (session_id_str, signature_b64) = token.split_once('.')?;

        let signature = from_base64_url(signature_b64).ok()?;

        let mut mac = self.mac().ok()?;
        mac.update(session_id_str.as_bytes());
        mac.verify_slice(&signature).ok()?;

        session_id_str.parse().ok()
    }
}

impl std::fmt::Debug for SessionTokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenCodec")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_then_verify() {
        let codec = SessionTokenCodec::new([7u8; 32]);
        let id = Uuid::new_v4();

        let token = codec.sign(id).unwrap();
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(codec.verify(&token), Some(id));
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = SessionTokenCodec::new([1u8; 32])
            .sign(Uuid::new_v4())
            .unwrap();
        assert_eq!(SessionTokenCodec::new([2u8; 32]).verify(&token), None);
    }

    #[test]
    fn test_swapped_id_rejected() {
        let codec = SessionTokenCodec::new([7u8; 32]);
        let token = codec.sign(Uuid::new_v4()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let forged = format!("{}.{}", Uuid::new_v4(), signature);
        assert_eq!(codec.verify(&forged), None);
    }

    #[test]
    fn test_garbage_rejected() {
        let codec = SessionTokenCodec::new([7u8; 32]);
        assert_eq!(codec.verify(""), None);
        assert_eq!(codec.verify("no-dot"), None);
        assert_eq!(codec.verify("a.b.c"), None);
        assert_eq!(codec.verify("not-a-uuid.!!!"), None);
    }
}
