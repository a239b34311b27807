//! In-memory storage provider for testing.
//!
//! Stores items in a shared map and lets tests inject failures per
//! operation or per key, to exercise best-effort cleanup paths.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::traits::{StorageError, StorageProvider};

/// In-memory storage provider for testing.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// inspect what the code under test wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    failing_reads: Arc<Mutex<HashSet<String>>>,
    failing_writes: Arc<Mutex<HashSet<String>>>,
    failing_removes: Arc<Mutex<HashSet<String>>>,
}

impl InMemoryStorage {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider pre-populated with items.
    pub fn with_items<I, K, V>(items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let storage = Self::new();
        {
            let mut map = storage.items.lock().unwrap();
            for (k, v) in items {
                map.insert(k.into(), v.into());
            }
        }
        storage
    }

    /// Make reads of `key` fail.
    pub fn fail_reads_of(&self, key: &str) {
        self.failing_reads.lock().unwrap().insert(key.to_string());
    }

    /// Make writes of `key` fail.
    pub fn fail_writes_of(&self, key: &str) {
        self.failing_writes.lock().unwrap().insert(key.to_string());
    }

    /// Make removals of `key` fail.
    pub fn fail_removes_of(&self, key: &str) {
        self.failing_removes.lock().unwrap().insert(key.to_string());
    }

    /// Get an item synchronously (for assertions).
    pub fn item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl StorageProvider for InMemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.failing_reads.lock().unwrap().contains(key) {
            return Err(StorageError::ReadFailed(format!("Mock read failure: {}", key)));
        }
        Ok(self.item(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing_writes.lock().unwrap().contains(key) {
            return Err(StorageError::WriteFailed(format!("Mock write failure: {}", key)));
        }
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.failing_removes.lock().unwrap().contains(key) {
            return Err(StorageError::RemoveFailed(format!("Mock remove failure: {}", key)));
        }
        self.items.lock().unwrap().remove(key);
        Ok(())
    }
}
