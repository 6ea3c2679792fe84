//! Booking repository.

use std::sync::Arc;

use serde_json::Value;

use cardoctor_core::result::AppResult;
use cardoctor_core::traits::DocumentCollection;
use cardoctor_core::types::{
    DeleteResult, Document, DocumentFilter, DocumentId, FilterField, InsertResult, UpdateResult,
};

/// Field holding the booking owner's email.
pub const OWNER_FIELD: &str = "email";

/// Field updated by status changes.
pub const STATUS_FIELD: &str = "status";

/// Pass-through access to booking records.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    /// List the bookings owned by `email`.
    pub async fn find_by_owner(&self, email: &str) -> AppResult<Vec<Document>> {
        let filter = DocumentFilter::all().and(FilterField::eq(OWNER_FIELD, email));
        self.collection.find(&filter).await
    }

    /// Store a booking verbatim.
    pub async fn create(&self, booking: Document) -> AppResult<InsertResult> {
        self.collection.insert_one(booking).await
    }

    /// Set the booking's `status` field, leaving every other field untouched.
    pub async fn update_status(&self, id: &DocumentId, status: Value) -> AppResult<UpdateResult> {
        let mut fields = Document::new();
        fields.insert(STATUS_FIELD.to_string(), status);
        self.collection.update_one(id, fields).await
    }

    /// Remove a booking.
    pub async fn delete(&self, id: &DocumentId) -> AppResult<DeleteResult> {
        self.collection.delete_one(id).await
    }
}
