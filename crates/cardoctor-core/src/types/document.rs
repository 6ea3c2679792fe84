//! Schemaless documents and field projections.

use serde_json::{Map, Value};

use super::id::DocumentId;

/// A stored record: an arbitrary JSON object.
pub type Document = Map<String, Value>;

/// Key under which every stored document carries its identifier.
pub const ID_FIELD: &str = "_id";

/// Writes `id` into the document's `_id` field, replacing any existing value.
pub fn stamp_id(doc: &mut Document, id: DocumentId) {
    doc.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
}

/// An inclusion projection: the listed fields plus `_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    /// Create a projection keeping the given fields.
    pub fn include<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names kept by this projection, excluding `_id`.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Applies the projection. Missing fields are skipped.
    pub fn apply(&self, doc: &Document) -> Document {
        let mut out = Document::new();
        if let Some(id) = doc.get(ID_FIELD) {
            out.insert(ID_FIELD.to_string(), id.clone());
        }
        for field in &self.fields {
            if let Some(value) = doc.get(field) {
                out.insert(field.clone(), value.clone());
            }
        }
        out
    }
}
