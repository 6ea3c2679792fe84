//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query parameters of `GET /bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingQuery {
    /// Email whose bookings are requested.
    pub email: Option<String>,
}

/// Body of `PATCH /bookings/{id}`. Only `status` is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// New booking status.
    pub status: Option<Value>,
}
