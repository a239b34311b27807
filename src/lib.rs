//! Gym client - REST client and session lifecycle for a gym workout app
//!
//! The crate talks to the gym API (sign-in, sign-up, profile, muscle groups,
//! exercises, history), keeps the signed-in user and bearer token in step
//! with device-local storage, and drives the screen flows that surface
//! failures as toasts.

pub mod adapters;
pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod screens;
pub mod storage;
pub mod traits;

pub use app::{GymApp, RouteStack};
pub use config::ClientConfig;
pub use error::{GymError, GymResult};
