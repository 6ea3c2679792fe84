//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Success acknowledgement for session endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    /// A bare `{ "success": true }`.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// `{ "success": true, "message": ... }`.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

/// The `error` field of an error body: `true` for auth failures, `1` for scope mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorFlag {
    /// Boolean flag.
    Flag(bool),
    /// Numeric code.
    Code(u8),
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Error marker.
    pub error: ErrorFlag,
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Document store status.
    pub store: String,
}
