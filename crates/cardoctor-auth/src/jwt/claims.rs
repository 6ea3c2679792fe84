//! Identity claim carried inside session tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registered claim holding the expiration timestamp.
pub const EXPIRES_AT: &str = "exp";

/// Caller-declared identity, embedded verbatim in a token.
///
/// Any JSON object is accepted; only `email` is read by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityClaim(Map<String, Value>);

impl IdentityClaim {
    /// Wraps a JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds a claim carrying only an email.
    pub fn with_email(email: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("email".to_string(), Value::String(email.into()));
        Self(fields)
    }

    /// The claimed email, when present as a string.
    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    /// All declared fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Unwraps into the declared fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

/// Token payload: the identity claim plus the expiration timestamp.
///
/// Any `iat` belongs to the identity and passes through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TokenClaims {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    pub exp: i64,
}
