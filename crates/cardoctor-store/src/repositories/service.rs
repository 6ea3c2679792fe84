//! Service catalog repository.

use std::sync::Arc;

use cardoctor_core::result::AppResult;
use cardoctor_core::traits::DocumentCollection;
use cardoctor_core::types::{Document, DocumentFilter, DocumentId, Projection};

/// Fields returned by the single-service lookup, besides `_id`.
pub const SERVICE_SUMMARY_FIELDS: [&str; 4] = ["title", "price", "service_id", "img"];

/// Read-only access to the service catalog.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl ServiceRepository {
    /// Create a new service repository.
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// List every service record.
    pub async fn list_all(&self) -> AppResult<Vec<Document>> {
        self.collection.find(&DocumentFilter::all()).await
    }

    /// Find one service, projected to its summary fields.
    pub async fn find_summary(&self, id: &DocumentId) -> AppResult<Option<Document>> {
        let projection = Projection::include(SERVICE_SUMMARY_FIELDS);
        self.collection.find_one(id, Some(&projection)).await
    }
}
