//! Per-port cassette configuration for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Cassette file paths, one optional file per port. Ports left as `None`
/// panic if called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the store port.
    pub store: Option<PathBuf>,
    /// Cassette for the ID generator port.
    pub id_gen: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the store port.
    pub store: Option<CassetteReplayer>,
    /// Replayer for the ID generator port.
    pub id_gen: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Returns a config with no cassettes; every port panics when called.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Points both ports at the cassettes a recording session wrote into `dir`.
    #[must_use]
    pub fn from_session_dir(dir: &Path) -> Self {
        Self {
            store: Some(dir.join("store.cassette.yaml")),
            id_gen: Some(dir.join("id_gen.cassette.yaml")),
        }
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Path| Cassette::load(path).map(|c| CassetteReplayer::new(&c));
        Ok(PortReplayers {
            store: self.store.as_deref().map(load).transpose()?,
            id_gen: self.id_gen.as_deref().map(load).transpose()?,
        })
    }
}
