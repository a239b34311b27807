//! Unified error type for the gym client.
//!
//! Every fallible operation in the crate returns [`GymError`]. Screens
//! turn it into a toast title with [`GymError::toast_title`]: the server's
//! own message for [`AppError`], a caller-supplied fallback for the rest.

use thiserror::Error;

use super::app_error::AppError;
use super::auth::AuthError;
use super::network::NetworkError;
use crate::traits::StorageError;

/// Unified error type for the gym client.
#[derive(Debug, Error)]
pub enum GymError {
    /// The API answered with a known error payload.
    #[error(transparent)]
    App(#[from] AppError),

    /// Transport failure or unexpected HTTP status.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Session lifecycle errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Local storage errors.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A successful response whose body could not be decoded.
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

impl GymError {
    /// Whether this is an error payload returned by the API.
    pub fn is_app_error(&self) -> bool {
        matches!(self, GymError::App(_))
    }

    /// Title for a toast reporting this error.
    ///
    /// API messages are already localized for display; everything else is
    /// replaced by `fallback`.
    pub fn toast_title(&self, fallback: &str) -> String {
        match self {
            GymError::App(err) => err.message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            GymError::Network(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            GymError::App(_) => "E_APP",
            GymError::Network(err) => err.error_code(),
            GymError::Auth(err) => err.error_code(),
            GymError::Storage(_) => "E_STORAGE",
            GymError::InvalidResponse { .. } => "E_INVALID_RESPONSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Não foi possivel carregar os exercícios.";

    #[test]
    fn test_toast_title_uses_app_message() {
        let err: GymError = AppError::new(404, "Exercício não encontrado.").into();
        assert!(err.is_app_error());
        assert_eq!(err.toast_title(FALLBACK), "Exercício não encontrado.");
    }

    #[test]
    fn test_toast_title_falls_back_for_other_errors() {
        let errors: Vec<GymError> = vec![
            NetworkError::Timeout {
                url: "http://api/groups".to_string(),
                message: "30s".to_string(),
            }
            .into(),
            NetworkError::HttpStatus {
                status: 502,
                message: "Bad Gateway".to_string(),
            }
            .into(),
            StorageError::ReadFailed("denied".to_string()).into(),
            GymError::InvalidResponse {
                endpoint: "/groups".to_string(),
                message: "expected array".to_string(),
            },
        ];

        for err in errors {
            assert!(!err.is_app_error());
            assert_eq!(err.toast_title(FALLBACK), FALLBACK);
        }
    }

    #[test]
    fn test_error_codes() {
        let err: GymError = AuthError::IncompleteSessionResponse {
            has_user: false,
            has_token: true,
        }
        .into();
        assert_eq!(err.error_code(), "E_AUTH_INCOMPLETE");
        assert!(!err.is_retryable());
        let err: GymError = StorageError::WriteFailed("x".into()).into();
        assert_eq!(err.error_code(), "E_STORAGE");
    }
}
