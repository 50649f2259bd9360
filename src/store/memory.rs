//! In-memory store.

use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;

use super::{KeyValueStore, Result, StoreError};

/// Shared in-memory map
///
/// Clones share the same entries, so a caller can keep a handle while a
/// `SaveWriter` owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<FxHashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    ///
    /// # Errors
    /// Returns `StoreError::LockPoisoned` if a writer panicked mid-update.
    pub fn key_count(&self) -> Result<usize> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| StoreError::LockPoisoned)?
            .len())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}
