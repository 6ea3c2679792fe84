//! # cardoctor-core
//!
//! Core crate for the Car Doctor backend. Contains the configuration
//! schema, document and identifier types, the document collection trait,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Car Doctor crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
