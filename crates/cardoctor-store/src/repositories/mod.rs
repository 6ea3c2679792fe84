//! Repositories over the two named collections.

pub mod booking;
pub mod service;

pub use booking::BookingRepository;
pub use service::ServiceRepository;
