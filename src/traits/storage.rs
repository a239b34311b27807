//! Local key/value storage trait abstraction.
//!
//! The session cache only needs string values under fixed keys, so the
//! trait mirrors a device key/value store: get, set and remove an item.

use async_trait::async_trait;

/// Storage operation errors.
#[derive(Debug, Clone)]
pub enum StorageError {
    /// Failed to read an item
    ReadFailed(String),
    /// Failed to write an item
    WriteFailed(String),
    /// Failed to remove an item
    RemoveFailed(String),
    /// Stored value could not be (de)serialized
    Serialization(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadFailed(msg) => write!(f, "Failed to read from storage: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Failed to write to storage: {}", msg),
            StorageError::RemoveFailed(msg) => {
                write!(f, "Failed to remove from storage: {}", msg)
            }
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

/// Trait for device-local key/value storage.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value under `key`. Removing a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
