//! Authentication-related error types.

use thiserror::Error;

/// Authentication-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The sign-in response lacked the user, the token, or both.
    #[error("Sign-in response incomplete (user present: {has_user}, token present: {has_token})")]
    IncompleteSessionResponse { has_user: bool, has_token: bool },
}

impl AuthError {
    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::IncompleteSessionResponse { .. } => "E_AUTH_INCOMPLETE",
        }
    }
}
