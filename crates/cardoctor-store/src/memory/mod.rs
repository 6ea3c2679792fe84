//! In-memory document collections.

pub mod collection;

pub use collection::MemoryCollection;
