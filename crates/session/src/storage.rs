//! Persistent key-value storage capability

use crate::error::SessionResult;
use std::collections::HashMap;
use std::sync::Mutex;

/// Persistent key-value storage, scoped per embedding (browser
/// profile/origin, test fixture, …). Values survive page reloads but
/// carry no expiry.
pub trait StorageBackend: Send + Sync {
    /// Read a value by key
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// In-memory storage backend for tests and native embeddings
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let entries = self.entries.lock().expect("Failed to acquire storage lock");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().expect("Failed to acquire storage lock");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        let mut entries = self.entries.lock().expect("Failed to acquire storage lock");
        entries.remove(key);
        Ok(())
    }
}
