//! Equality filters for document queries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::Document;

/// A single equality condition on a top-level field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// The field name to filter on.
    pub field: String,
    /// The value the field must equal.
    pub value: Value,
}

impl FilterField {
    /// Shorthand for an equality filter on a string value.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: Value::String(value.into()),
        }
    }

    /// Whether the document satisfies this condition.
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field) == Some(&self.value)
    }
}

/// A conjunction of equality conditions. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// All conditions must hold.
    pub conditions: Vec<FilterField>,
}

impl DocumentFilter {
    /// A filter that matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Adds an equality condition.
    pub fn and(mut self, condition: FilterField) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Whether the document satisfies every condition.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions.iter().all(|c| c.matches(doc))
    }

    /// Renders the filter as a JSON object suitable for containment queries.
    pub fn to_json(&self) -> Value {
        let mut obj = Document::new();
        for c in &self.conditions {
            obj.insert(c.field.clone(), c.value.clone());
        }
        Value::Object(obj)
    }
}
