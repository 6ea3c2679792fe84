//! Core traits defined in `cardoctor-core` and implemented by other crates.

pub mod collection;

pub use collection::DocumentCollection;
