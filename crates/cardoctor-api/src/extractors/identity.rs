//! `VerifiedIdentity` extractor: the claim attached by the session middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cardoctor_auth::jwt::IdentityClaim;
use cardoctor_core::error::AppError;

use crate::error::{ApiError, UNAUTHORIZED_MESSAGE};

/// Identity decoded from the session cookie, available in protected handlers.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity(pub IdentityClaim);

impl std::ops::Deref for VerifiedIdentity {
    type Target = IdentityClaim;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for VerifiedIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<IdentityClaim>()
            .cloned()
            .map(VerifiedIdentity)
            .ok_or_else(|| ApiError(AppError::unauthenticated(UNAUTHORIZED_MESSAGE)))
    }
}
