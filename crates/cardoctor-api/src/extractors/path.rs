//! Typed path parameter helpers.

use cardoctor_core::result::AppResult;
use cardoctor_core::types::DocumentId;

/// Parses a document id from a path segment.
pub fn parse_document_id(s: &str) -> AppResult<DocumentId> {
    DocumentId::parse(s)
}
