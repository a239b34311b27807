//! Error handling for the gym client.
//!
//! - **AppError**: an error payload the API returned, with a user-facing message
//! - **NetworkError**: transport failures and unexpected statuses
//! - **AuthError**: session lifecycle failures
//! - **GymError**: the unified type every operation returns
//!
//! Screens never propagate errors: they show a toast whose title is either
//! the API message or a localized fallback, see [`GymError::toast_title`].

mod app_error;
mod auth;
mod gym_error;
mod network;
mod result;

pub use app_error::AppError;
pub use auth::AuthError;
pub use gym_error::GymError;
pub use network::{classify_http_error, NetworkError};
pub use result::GymResult;
pub use crate::traits::StorageError;
