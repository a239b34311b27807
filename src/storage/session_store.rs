use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{AUTH_TOKEN_STORAGE, USER_STORAGE};
use crate::models::UserDto;
use crate::traits::{StorageError, StorageProvider};

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// Reads and writes the persisted session records.
///
/// A record that exists but cannot be decoded is treated as absent, so a
/// corrupted file leaves the user signed out instead of failing startup.
#[derive(Clone)]
pub struct SessionStore {
    provider: Arc<dyn StorageProvider>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Create a store on top of a storage provider.
    pub fn new(provider: Arc<dyn StorageProvider>) -> Self {
        Self { provider }
    }

    pub async fn save_user(&self, user: &UserDto) -> Result<(), StorageError> {
        let value = serde_json::to_string(user)?;
        self.provider.set_item(USER_STORAGE, &value).await
    }

    pub async fn get_user(&self) -> Result<Option<UserDto>, StorageError> {
        let Some(value) = self.provider.get_item(USER_STORAGE).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&value) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored user");
                Ok(None)
            }
        }
    }

    pub async fn remove_user(&self) -> Result<(), StorageError> {
        self.provider.remove_item(USER_STORAGE).await
    }

    pub async fn save_token(&self, token: &str) -> Result<(), StorageError> {
        let value = serde_json::to_string(&StoredToken {
            token: token.to_string(),
        })?;
        self.provider.set_item(AUTH_TOKEN_STORAGE, &value).await
    }

    pub async fn get_token(&self) -> Result<Option<String>, StorageError> {
        let Some(value) = self.provider.get_item(AUTH_TOKEN_STORAGE).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<StoredToken>(&value) {
            Ok(stored) if !stored.token.is_empty() => Ok(Some(stored.token)),
            Ok(_) => Ok(None),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored token");
                Ok(None)
            }
        }
    }

    pub async fn remove_token(&self) -> Result<(), StorageError> {
        self.provider.remove_item(AUTH_TOKEN_STORAGE).await
    }
}
