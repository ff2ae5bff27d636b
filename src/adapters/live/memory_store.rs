//! In-memory store adapter.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StoreError;
use crate::ports::Store;

/// Store backed by a `HashMap`, living only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.values.lock().map_err(|e| StoreError::Backend(format!("memory store poisoned: {e}")))
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<String, StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(value.to_string())
    }
}
