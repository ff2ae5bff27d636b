//! Service context bundling the port trait objects.

use std::path::Path;

use crate::adapters::live::{FileStore, LiveIdGenerator};
use crate::adapters::recording::{RecordingIdGenerator, RecordingStore};
use crate::adapters::replaying::{ReplayingIdGenerator, ReplayingStore};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::error::{GenerateError, StoreError};
use crate::generator::{ClientId, GenerationOptions};
use crate::ports::{IdGenerator, Store};

use tracing::debug;

/// The store and generator an installer works against.
///
/// Constructors wire up live, recording, or replaying adapters; tests
/// build one directly from fakes with [`ServiceContext::new`].
pub struct ServiceContext {
    /// Where the identifier is persisted.
    pub store: Box<dyn Store>,
    /// Where fresh identifiers come from.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Creates a context from explicit port implementations.
    #[must_use]
    pub fn new(store: Box<dyn Store>, id_gen: Box<dyn IdGenerator>) -> Self {
        Self { store, id_gen }
    }

    /// Creates a live context: a file store at `settings.store_path` and
    /// the thread-local RNG generator.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        let store = FileStore::new(&settings.store_path);
        debug!(path = %store.path().display(), "using file store");
        Self::new(Box::new(store), Box::new(LiveIdGenerator::new()))
    }

    /// Creates a live context whose port calls are recorded into a new
    /// session under `root`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(
        settings: &Settings,
        root: &Path,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root)?;
        let live = Self::live(settings);
        let ctx = Self::new(
            Box::new(RecordingStore::new(live.store, std::sync::Arc::clone(&session.store))),
            Box::new(RecordingIdGenerator::new(
                live.id_gen,
                std::sync::Arc::clone(&session.id_gen),
            )),
        );
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding both
    /// ports' interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        // Separate replayers keep per-port cursors independent.
        Ok(Self::new(
            Box::new(ReplayingStore::new(CassetteReplayer::new(&cassette))),
            Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
        ))
    }

    /// Creates a replaying context from per-port cassettes. Ports without
    /// a cassette panic with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self::new(
            match replayers.store {
                Some(r) => Box::new(ReplayingStore::new(r)),
                None => Box::new(PanickingStore),
            },
            match replayers.id_gen {
                Some(r) => Box::new(ReplayingIdGenerator::new(r)),
                None => Box::new(PanickingIdGenerator),
            },
        ))
    }
}

struct PanickingStore;
impl Store for PanickingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        panic!("Store port not configured in CassetteConfig: no cassette loaded for store");
    }
    fn set(&self, _key: &str, _value: &str) -> Result<String, StoreError> {
        panic!("Store port not configured in CassetteConfig: no cassette loaded for store");
    }
}

struct PanickingIdGenerator;
impl IdGenerator for PanickingIdGenerator {
    fn generate(&self, _options: &GenerationOptions) -> Result<ClientId, GenerateError> {
        panic!("IdGenerator port not configured in CassetteConfig: no cassette loaded for id_gen");
    }
}
