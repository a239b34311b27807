//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT)
//! - [`StorageProvider`] - Device-local key/value storage
//! - [`Toaster`] - Sink for toast notifications raised by screens

pub mod http;
pub mod storage;
pub mod toast;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::{StorageError, StorageProvider};
pub use toast::{Toast, ToastKind, Toaster};
