//! Session handlers: login and logout.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use cardoctor_auth::jwt::IdentityClaim;
use cardoctor_core::error::AppError;
use cardoctor_core::result::AppResult;

use crate::dto::response::SuccessResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /jwt
///
/// Trusts the declared claim verbatim and installs a signed session cookie.
/// The content type is not checked; an empty body declares an empty claim.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<(CookieJar, Json<SuccessResponse>), ApiError> {
    let claim = parse_claim(&body)?;
    info!(claim = ?claim.fields(), "Token requested");

    let cookie = state.session_issuer.login(&claim)?;
    Ok((jar.add(cookie), Json(SuccessResponse::ok())))
}

/// POST /logout
///
/// Clears the session cookie. The previously issued token is not revoked.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> (CookieJar, Json<SuccessResponse>) {
    info!(body = %String::from_utf8_lossy(&body), "Logging out");

    (
        jar.add(state.session_issuer.logout()),
        Json(SuccessResponse::with_message("Logged out successfully")),
    )
}

fn parse_claim(body: &[u8]) -> AppResult<IdentityClaim> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(IdentityClaim::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Identity claim must be a JSON object: {e}")))
}
