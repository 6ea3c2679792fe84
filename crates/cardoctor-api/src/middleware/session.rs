//! Session cookie middleware guarding protected routes.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use crate::error::ApiError;
use crate::state::AppState;

/// Verifies the session cookie and attaches the decoded identity to the request.
///
/// Missing (or empty) cookie: 401. Present but untrusted: 403. Otherwise the
/// `IdentityClaim` is inserted into the request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = jar
        .get(state.session_issuer.cookie_name())
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty());

    let claim = state.session_verifier.authenticate(token)?;

    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        email = ?claim.email(),
        "Session verified"
    );

    request.extensions_mut().insert(claim);
    Ok(next.run(request).await)
}
