//! Local persistence of the session.
//!
//! The user profile and the auth token are stored as two serialized
//! records under fixed keys.

mod session_store;

pub use session_store::SessionStore;

/// Storage key of the serialized user profile.
pub const USER_STORAGE: &str = "@gymapp:user";

/// Storage key of the serialized auth token.
pub const AUTH_TOKEN_STORAGE: &str = "@gymapp:token";
