//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use cardoctor_core::error::{AppError, ErrorKind};

use crate::dto::response::{ApiErrorResponse, ErrorFlag};

/// Body message for missing or untrusted session tokens.
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";

/// Body message for scope mismatches.
pub const FORBIDDEN_MESSAGE: &str = "forbidden access";

/// HTTP-facing wrapper around [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_auth_failure() {
            tracing::debug!(kind = %err.kind, reason = %err.message, "Request rejected");
        }

        let (status, error, message) = match err.kind {
            ErrorKind::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorFlag::Flag(true),
                UNAUTHORIZED_MESSAGE.to_string(),
            ),
            ErrorKind::Untrusted => (
                StatusCode::FORBIDDEN,
                ErrorFlag::Flag(true),
                UNAUTHORIZED_MESSAGE.to_string(),
            ),
            ErrorKind::Forbidden => (
                StatusCode::FORBIDDEN,
                ErrorFlag::Code(1),
                FORBIDDEN_MESSAGE.to_string(),
            ),
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, ErrorFlag::Flag(true), err.message),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, ErrorFlag::Flag(true), err.message),
            ErrorKind::Serialization
            | ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Internal => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorFlag::Flag(true),
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiErrorResponse { error, message })).into_response()
    }
}
