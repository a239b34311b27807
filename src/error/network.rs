//! Network-related error types.
//!
//! This module defines errors that occur while talking to the API,
//! including transport failures and unexpected HTTP statuses.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String, message: String },

    /// The request URL could not be built.
    InvalidUrl { url: String },

    /// HTTP status error (non-2xx response without an API error payload).
    HttpStatus { status: u16, message: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL '{}'", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

/// Classify a transport error for the request to `url`.
pub fn classify_http_error(err: HttpError, url: &str) -> NetworkError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        },
        HttpError::Timeout(message) => NetworkError::Timeout {
            url: url.to_string(),
            message,
        },
        HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
            url: url.to_string(),
        },
        HttpError::Other(message) => NetworkError::Other { message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_is_retryable() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:3333".to_string(),
            message: "Connection refused".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_CONN");
    }

    #[test]
    fn test_http_status_retryable_for_server_errors() {
        for status in [500, 503, 429, 408] {
            let err = NetworkError::HttpStatus {
                status,
                message: String::new(),
            };
            assert!(err.is_retryable(), "status {} should be retryable", status);
        }
    }

    #[test]
    fn test_http_status_not_retryable_for_client_errors() {
        for status in [400, 401, 404] {
            let err = NetworkError::HttpStatus {
                status,
                message: String::new(),
            };
            assert!(!err.is_retryable(), "status {} should not be retryable", status);
        }
    }

    #[test]
    fn test_classify_http_error() {
        let url = "http://localhost:3333/groups";
        assert!(matches!(
            classify_http_error(HttpError::ConnectionFailed("refused".into()), url),
            NetworkError::ConnectionFailed { .. }
        ));
        assert!(matches!(
            classify_http_error(HttpError::Timeout("30s".into()), url),
            NetworkError::Timeout { .. }
        ));
        match classify_http_error(HttpError::InvalidUrl("bad".into()), url) {
            NetworkError::InvalidUrl { url: u } => assert_eq!(u, url),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_display_format() {
        let err = NetworkError::ConnectionFailed {
            url: "http://api.example.com".to_string(),
            message: "refused".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("api.example.com"));
        assert!(display.contains("refused"));
    }
}
