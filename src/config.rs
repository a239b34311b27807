//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! read overrides from the environment.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `GYM_API_URL` | API base URL | `http://localhost:3333` |
//! | `GYM_STORAGE_DIR` | Session storage directory | `~/.gymapp` |
//! | `GYM_HTTP_TIMEOUT_SECS` | Per-request timeout | `30` |

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::file_storage::STORAGE_DIR;
use crate::api::DEFAULT_API_URL;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for building a [`GymApp`](crate::app::GymApp).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL
    pub api_url: String,
    /// Directory holding the session records (`None`: `~/.gymapp`)
    pub storage_dir: Option<PathBuf>,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_dir: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The storage directory to use, resolving the default under the
    /// home directory. `None` if no home directory is known.
    pub fn resolved_storage_dir(&self) -> Option<PathBuf> {
        match &self.storage_dir {
            Some(dir) => Some(dir.clone()),
            None => dirs::home_dir().map(|home| home.join(STORAGE_DIR)),
        }
    }

    /// Defaults overridden by `GYM_*` environment variables.
    ///
    /// Empty values are ignored. An unparseable timeout keeps the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var("GYM_API_URL") {
            config = config.with_api_url(url);
        }
        if let Some(dir) = non_empty_var("GYM_STORAGE_DIR") {
            config = config.with_storage_dir(dir);
        }
        if let Some(secs) = non_empty_var("GYM_HTTP_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config = config.with_request_timeout(Duration::from_secs(secs))
                }
                _ => tracing::warn!(value = %secs, "Ignoring invalid GYM_HTTP_TIMEOUT_SECS"),
            }
        }

        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
