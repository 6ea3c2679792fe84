//! # cardoctor-api
//!
//! HTTP API layer for Car Doctor built on Axum.
//!
//! Provides the session endpoints, the catalog and booking endpoints, the
//! session-cookie middleware guarding `GET /bookings`, request logging,
//! CORS, and the mapping from `AppError` to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
