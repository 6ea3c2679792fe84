//! Token signing and session cookie configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Symmetric secret for token signing (HMAC-SHA256). Read once at start-up.
    #[serde(default)]
    pub token_secret: String,
    /// Token lifetime in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Session cookie attributes.
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_ttl_minutes: default_token_ttl(),
            cookie: CookieConfig::default(),
        }
    }
}

/// Attributes of the cookie that carries the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieConfig {
    /// Cookie name.
    #[serde(default = "default_cookie_name")]
    pub name: String,
    /// Cookie path.
    #[serde(default = "default_cookie_path")]
    pub path: String,
    /// Hide the cookie from page scripts.
    #[serde(default = "default_true")]
    pub http_only: bool,
    /// Only send the cookie over encrypted transport.
    #[serde(default = "default_true")]
    pub secure: bool,
    /// `SameSite` policy: `"none"`, `"lax"` or `"strict"`.
    #[serde(default = "default_same_site")]
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            path: default_cookie_path(),
            http_only: true,
            secure: true,
            same_site: default_same_site(),
        }
    }
}

fn default_token_ttl() -> u64 {
    60
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_same_site() -> String {
    "none".to_string()
}

fn default_true() -> bool {
    true
}
