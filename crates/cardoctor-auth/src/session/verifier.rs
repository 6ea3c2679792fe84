//! Session verification: turns a presented cookie value into a trusted identity.

use std::sync::Arc;

use tracing::{debug, warn};

use cardoctor_core::error::AppError;
use cardoctor_core::result::AppResult;

use crate::jwt::{IdentityClaim, TokenCodec};

/// Decides whether a presented session token is trusted.
///
/// No token is `Unauthenticated`; a token failing signature or expiry is
/// `Untrusted`. Every failure is terminal for the request.
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    codec: Arc<TokenCodec>,
}

impl SessionVerifier {
    /// Creates a verifier over the shared codec.
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Verifies the token carried by the session cookie, if any.
    pub fn authenticate(&self, token: Option<&str>) -> AppResult<IdentityClaim> {
        let Some(token) = token else {
            debug!("No session token presented");
            return Err(AppError::unauthenticated("unauthorized access"));
        };

        self.codec.verify(token).map_err(|e| {
            warn!(reason = %e, "Rejected session token");
            AppError::from(e)
        })
    }
}
