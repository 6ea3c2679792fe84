//! HTTP request handlers organized by domain.

pub mod auth;
pub mod booking;
pub mod health;
pub mod service;
