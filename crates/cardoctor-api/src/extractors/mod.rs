//! Custom Axum extractors.

pub mod identity;
pub mod path;

pub use identity::VerifiedIdentity;
pub use path::parse_document_id;
