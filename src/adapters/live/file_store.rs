//! File-backed store adapter.
//!
//! All keys live in one JSON object on disk:
//!
//! ```text
//! { "clientId": "q3Zt9..." }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::ports::Store;

/// Store persisting a JSON object of string values to a single file.
///
/// A missing file reads as an empty store. Every `set` rewrites the whole
/// file, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store persisting to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&contents)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| StoreError::Backend(format!("failed to encode store: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.load()?.remove(key);
        debug!(path = %self.path.display(), key, found = value.is_some(), "read store");
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<String, StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)?;
        debug!(path = %self.path.display(), key, "wrote store");
        Ok(value.to_string())
    }
}
