//! Core type definitions used across the Car Doctor workspace.

pub mod document;
pub mod filter;
pub mod id;
pub mod write_result;

pub use document::{Document, ID_FIELD, Projection, stamp_id};
pub use filter::{DocumentFilter, FilterField};
pub use id::DocumentId;
pub use write_result::{DeleteResult, InsertResult, UpdateResult};
