//! # cardoctor-auth
//!
//! Authentication and authorization for the Car Doctor backend.
//!
//! ## Modules
//!
//! - `jwt`: identity claims and the HS256 token codec
//! - `session`: session cookie issuance (login/logout) and verification
//! - `guard`: the booking access guard tying a verified identity to the requested email
//!
//! Login trusts the caller-declared identity: no credential is checked and
//! issued tokens stay valid until they expire, logout included.

pub mod guard;
pub mod jwt;
pub mod session;

pub use guard::{AccessDecision, AccessGuard};
pub use jwt::{IdentityClaim, IssuedToken, TokenCodec, TokenError};
pub use session::{SessionIssuer, SessionVerifier};
