//! Presenter state for the app's screens.
//!
//! Each screen owns its loading flags and fetched data. Handlers never
//! return errors to the host: failures are reported through the
//! [`Toaster`](crate::traits::Toaster) and the loading flag is cleared.

pub mod exercise;
pub mod home;
pub mod profile;
pub mod sign_in;
pub mod sign_up;

pub use exercise::ExerciseScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;
