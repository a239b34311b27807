//! REST API client for the gym backend.
//!
//! - [`ApiClient`] - shared client holding the base URL and default headers
//! - typed endpoint methods in [`endpoints`]

pub mod client;
pub mod endpoints;

pub use client::{ApiClient, DEFAULT_API_URL};
