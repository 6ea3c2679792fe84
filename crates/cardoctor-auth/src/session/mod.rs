//! Session cookie issuance and verification.

pub mod issuer;
pub mod verifier;

pub use issuer::SessionIssuer;
pub use verifier::SessionVerifier;
