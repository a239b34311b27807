//! Authentication session lifecycle.
//!
//! - [`SessionContext`] - sign-in, sign-out and restoration of the current user

pub mod session;

pub use session::{SessionContext, SessionState};
