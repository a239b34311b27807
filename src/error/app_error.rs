//! Errors reported by the API itself.
//!
//! The server answers failed requests with a JSON payload carrying a
//! user-facing `message`. Those become [`AppError`] and their message is
//! shown to the user verbatim.

use serde::Deserialize;
use thiserror::Error;

/// A known error payload returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// User-facing message from the server.
    pub message: String,
    /// HTTP status of the failed response.
    pub status: u16,
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: String,
}

impl AppError {
    /// Create an AppError.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Extract an AppError from a failed response body.
    ///
    /// Returns `None` unless the body is JSON with a non-empty string
    /// `message` field.
    pub fn from_response_body(status: u16, body: &[u8]) -> Option<Self> {
        let payload: ErrorPayload = serde_json::from_slice(body).ok()?;
        if payload.message.trim().is_empty() {
            return None;
        }
        Some(Self::new(status, payload.message))
    }
}
