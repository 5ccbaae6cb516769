//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub pin: PinInput,
}

/// PIN as posted by the front-end: either a JSON string or a JSON number
#[derive(Clone, Deserialize)]
#[serde(untagged)]
pub enum PinInput {
    Text(String),
    Number(u64),
}

impl PinInput {
    pub fn into_string(self) -> String {
        match self {
            PinInput::Text(s) => s,
            PinInput::Number(n) => n.to_string(),
        }
    }
}

impl std::fmt::Debug for PinInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PinInput([REDACTED])")
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
}

// ============================================================================
// Session Status
// ============================================================================

/// Auth status response (`username` is `null` when signed out)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub logged_in: bool,
    pub username: Option<String>,
}
