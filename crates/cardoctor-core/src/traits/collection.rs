//! Document collection trait for pluggable store backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{
    DeleteResult, Document, DocumentFilter, DocumentId, InsertResult, Projection, UpdateResult,
};

/// A named collection of schemaless JSON documents.
///
/// Implementations assign `_id` on insert and return it inside every
/// document they hand back. No schema is enforced.
#[async_trait]
pub trait DocumentCollection: Send + Sync + std::fmt::Debug + 'static {
    /// The collection name.
    fn name(&self) -> &str;

    /// Returns every document matching the filter, oldest first.
    async fn find(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>>;

    /// Returns the document with the given id, optionally projected.
    async fn find_one(
        &self,
        id: &DocumentId,
        projection: Option<&Projection>,
    ) -> AppResult<Option<Document>>;

    /// Stores the document under a fresh id. A client-supplied `_id` is replaced.
    async fn insert_one(&self, doc: Document) -> AppResult<InsertResult>;

    /// Sets the given top-level fields on the document with the given id.
    async fn update_one(&self, id: &DocumentId, fields: Document) -> AppResult<UpdateResult>;

    /// Removes the document with the given id.
    async fn delete_one(&self, id: &DocumentId) -> AppResult<DeleteResult>;

    /// Counts all documents in the collection.
    async fn count(&self) -> AppResult<u64>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
