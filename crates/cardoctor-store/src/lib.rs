//! # cardoctor-store
//!
//! Document store providers for Car Doctor. Supports two modes:
//!
//! - **memory**: In-process collections using [dashmap](https://crates.io/crates/dashmap)
//! - **postgres**: JSONB-backed collections using [sqlx](https://crates.io/crates/sqlx)
//!
//! The provider is selected at runtime based on configuration. The
//! `repositories` module wraps the `services` and `bookings` collections.

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod provider;
pub mod repositories;

pub use provider::StoreManager;
pub use repositories::{BookingRepository, ServiceRepository};
