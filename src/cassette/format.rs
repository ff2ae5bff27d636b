//! Cassette data structures.
//!
//! ```yaml
//! name: 2025-01-01T00-00-00.000-4242-store
//! recorded_at: 2025-01-01T00:00:00Z
//! commit: 0123abcd
//! interactions:
//!   - seq: 0
//!     port: store
//!     method: get
//!     input: { key: clientId }
//!     output: { ok: null }
//! ```

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The boundary a recorded call crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Port {
    /// The key-value store holding the identifier.
    Store,
    /// The identifier generator.
    IdGen,
}

impl Port {
    /// Every port, in cassette file order.
    pub const ALL: [Port; 2] = [Port::Store, Port::IdGen];

    /// Name used in cassettes and cassette file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Port::Store => "store",
            Port::IdGen => "id_gen",
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a port method returned: a value, or the text of its error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The call succeeded with this value.
    Ok(serde_json::Value),
    /// The call failed with this message.
    Err(String),
}

impl Outcome {
    /// Captures a method's result.
    ///
    /// # Panics
    ///
    /// Panics if the success value cannot be represented as JSON, which
    /// cannot happen for the strings and options the ports return.
    pub fn from_result<T: Serialize, E: fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(
                serde_json::to_value(value).expect("port results serialize to JSON"),
            ),
            Err(e) => Outcome::Err(e.to_string()),
        }
    }

    /// Shorthand for a successful outcome carrying `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be represented as JSON.
    pub fn ok(value: impl Serialize) -> Self {
        Self::from_result(&Ok::<_, String>(value))
    }

    /// Shorthand for a failed outcome.
    pub fn err(message: impl Into<String>) -> Self {
        Outcome::Err(message.into())
    }

    /// Turns the outcome back into the method's result.
    ///
    /// The outer error means the recorded value does not fit `T`, so the
    /// cassette no longer matches the code replaying it.
    ///
    /// # Errors
    ///
    /// Returns an error if an `Ok` value cannot be decoded as `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Result<T, String>, serde_json::Error> {
        match self {
            Outcome::Ok(value) => T::deserialize(value).map(Ok),
            Outcome::Err(message) => Ok(Err(message.clone())),
        }
    }
}

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the whole recording.
    pub seq: u64,
    /// Port the call was made on.
    pub port: Port,
    /// Method name, `get`/`set` for the store, `generate` for the generator.
    pub method: String,
    /// Arguments the method received.
    pub input: serde_json::Value,
    /// What the method returned.
    pub output: Outcome,
}

/// A named, timestamped recording of port calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Git commit the recording was made at.
    pub commit: String,
    /// Calls in the order they happened.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Writes the cassette as YAML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, yaml)
    }
}
