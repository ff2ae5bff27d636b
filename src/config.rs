//! Runtime settings resolved from the environment.

use std::path::PathBuf;

use crate::install::DEFAULT_STORE_KEY;

/// Environment variable naming the file store path.
pub const STORE_ENV: &str = "CLIENTID_STORE";
/// Environment variable naming the store key.
pub const KEY_ENV: &str = "CLIENTID_KEY";
/// Environment variable naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "CLIENTID_RECORD";
/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "CLIENTID_LOG";

/// Default location of the file store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = ".clientid/store.json";

/// Where the identifier lives and whether interactions are recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the JSON file store.
    pub store_path: PathBuf,
    /// Key the identifier is stored under.
    pub key: String,
    /// When set, port interactions are recorded to cassettes under this directory.
    pub record_dir: Option<PathBuf>,
}

impl Settings {
    /// Reads settings from the process environment, after loading `.env`
    /// if one is present.
    #[must_use]
    pub fn from_env() -> Self {
        // Only fills variables that are not already set.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds settings from an arbitrary variable lookup. Empty values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            store_path: var(STORE_ENV).map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from),
            key: var(KEY_ENV).unwrap_or_else(|| DEFAULT_STORE_KEY.to_string()),
            record_dir: var(RECORD_ENV).map(PathBuf::from),
        }
    }

    /// Applies command-line overrides on top of the environment.
    #[must_use]
    pub fn with_overrides(mut self, store: Option<PathBuf>, key: Option<String>) -> Self {
        if let Some(store) = store {
            self.store_path = store;
        }
        if let Some(key) = key {
            self.key = key;
        }
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
