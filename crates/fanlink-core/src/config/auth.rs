//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub token_ttl_minutes: u64,
    /// Session lifetime in hours. Sessions older than this are rejected
    /// even if the token itself has not expired.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Name of the cookie carrying the access token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_session_ttl() -> u64 {
    720
}

fn default_password_min() -> usize {
    8
}

fn default_cookie_name() -> String {
    "fanlink_token".to_string()
}
