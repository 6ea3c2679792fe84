//! Booking access guard.
//!
//! The single authorization decision in the service: a verified identity
//! may only read bookings scoped to its own email.

use tracing::debug;

use cardoctor_core::error::AppError;

use crate::jwt::IdentityClaim;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The request may proceed.
    Allow,
    /// The request must be rejected before any store access.
    Deny,
}

/// Ties a verified identity to the email scope a request asks for.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGuard;

impl AccessGuard {
    /// Creates a guard.
    pub fn new() -> Self {
        Self
    }

    /// `Allow` iff the claim carries an email equal to `requested_scope`.
    ///
    /// An absent scope or an absent claim email is a `Deny`.
    pub fn authorize(&self, claim: &IdentityClaim, requested_scope: Option<&str>) -> AccessDecision {
        match (claim.email(), requested_scope) {
            (Some(owner), Some(scope)) if owner == scope => AccessDecision::Allow,
            _ => AccessDecision::Deny,
        }
    }

    /// Like [`authorize`](Self::authorize) but returns the allowed scope or a forbidden error.
    pub fn enforce<'a>(
        &self,
        claim: &IdentityClaim,
        requested_scope: Option<&'a str>,
    ) -> Result<&'a str, AppError> {
        match (self.authorize(claim, requested_scope), requested_scope) {
            (AccessDecision::Allow, Some(scope)) => Ok(scope),
            _ => {
                debug!(
                    token_email = ?claim.email(),
                    requested = ?requested_scope,
                    "Booking scope does not match token identity"
                );
                Err(AppError::forbidden("forbidden access"))
            }
        }
    }
}
