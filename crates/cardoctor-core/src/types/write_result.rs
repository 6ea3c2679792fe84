//! Acknowledgements returned by document writes.

use serde::{Deserialize, Serialize};

use super::id::DocumentId;

/// Result of inserting one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    /// Whether the store accepted the write.
    pub acknowledged: bool,
    /// The identifier assigned to the new document.
    pub inserted_id: DocumentId,
}

/// Result of updating at most one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    /// Whether the store accepted the write.
    pub acknowledged: bool,
    /// Documents matched by the id.
    pub matched_count: u64,
    /// Documents whose content actually changed.
    pub modified_count: u64,
    /// Always zero; updates never upsert.
    pub upserted_count: u64,
    /// Always `None`; updates never upsert.
    pub upserted_id: Option<DocumentId>,
}

impl UpdateResult {
    /// Builds an acknowledged result.
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

/// Result of deleting at most one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Whether the store accepted the write.
    pub acknowledged: bool,
    /// Documents removed.
    pub deleted_count: u64,
}

impl DeleteResult {
    /// Builds an acknowledged result.
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
