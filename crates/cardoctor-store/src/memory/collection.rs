//! In-memory document collection using dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use cardoctor_core::result::AppResult;
use cardoctor_core::traits::DocumentCollection;
use cardoctor_core::types::{
    DeleteResult, Document, DocumentFilter, DocumentId, ID_FIELD, InsertResult, Projection,
    UpdateResult, stamp_id,
};

#[derive(Debug, Clone)]
struct StoredDocument {
    /// Insertion sequence, used to return documents oldest first.
    seq: u64,
    doc: Document,
}

/// In-process document collection.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone)]
pub struct MemoryCollection {
    name: String,
    docs: Arc<DashMap<DocumentId, StoredDocument>>,
    next_seq: Arc<AtomicU64>,
}

impl MemoryCollection {
    /// Create an empty collection.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn find(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        let mut matched: Vec<(u64, Document)> = self
            .docs
            .iter()
            .filter(|entry| filter.matches(&entry.value().doc))
            .map(|entry| (entry.value().seq, entry.value().doc.clone()))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);

        debug!(collection = %self.name, count = matched.len(), "find");
        Ok(matched.into_iter().map(|(_, doc)| doc).collect())
    }

    async fn find_one(
        &self,
        id: &DocumentId,
        projection: Option<&Projection>,
    ) -> AppResult<Option<Document>> {
        Ok(self.docs.get(id).map(|entry| match projection {
            Some(p) => p.apply(&entry.value().doc),
            None => entry.value().doc.clone(),
        }))
    }

    async fn insert_one(&self, mut doc: Document) -> AppResult<InsertResult> {
        let id = DocumentId::new();
        stamp_id(&mut doc, id);
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.docs.insert(id, StoredDocument { seq, doc });

        debug!(collection = %self.name, id = %id, "insert_one");
        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn update_one(&self, id: &DocumentId, mut fields: Document) -> AppResult<UpdateResult> {
        fields.remove(ID_FIELD);

        let Some(mut entry) = self.docs.get_mut(id) else {
            return Ok(UpdateResult::new(0, 0));
        };

        let stored = &mut entry.value_mut().doc;
        let mut modified = false;
        for (key, value) in fields {
            if stored.get(&key) != Some(&value) {
                stored.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateResult::new(1, u64::from(modified)))
    }

    async fn delete_one(&self, id: &DocumentId) -> AppResult<DeleteResult> {
        let removed = self.docs.remove(id).is_some();
        Ok(DeleteResult::new(u64::from(removed)))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.docs.len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
