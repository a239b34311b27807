//! Mock implementations for testing.
//!
//! This module provides mock implementations of all trait abstractions,
//! enabling tests without network access or file system access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStorage`] - In-memory key/value storage
//! - [`RecordingToaster`] - Toast sink that records what was shown

pub mod http;
pub mod storage;
pub mod toast;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use storage::InMemoryStorage;
pub use toast::RecordingToaster;
