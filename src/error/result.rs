//! Result type alias for gym client operations.

use super::gym_error::GymError;

/// Type alias for Results using GymError.
pub type GymResult<T> = Result<T, GymError>;
