//! Idempotent installation of the client identifier.
//!
//! Each call makes one linear pass:
//!
//! ```text
//! read store ──found──▶ return stored value
//!      │
//!   missing
//!      ▼
//! generate ──▶ write store ──▶ return generated value
//! ```
//!
//! There is no locking: two installs racing on an empty store may both
//! generate and write. Stores needing stronger guarantees must provide
//! them themselves.

use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::error::InstallError;
use crate::generator::{ClientId, GenerationOptions};

/// Key the identifier is stored under unless configured otherwise.
pub const DEFAULT_STORE_KEY: &str = "clientId";

/// Reads, and on first use creates, the client identifier in a store.
pub struct ClientIdInstaller<'a> {
    ctx: &'a ServiceContext,
    key: String,
}

impl<'a> ClientIdInstaller<'a> {
    /// Creates an installer using [`DEFAULT_STORE_KEY`].
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self::with_key(ctx, DEFAULT_STORE_KEY)
    }

    /// Creates an installer storing the identifier under `key`.
    #[must_use]
    pub fn with_key(ctx: &'a ServiceContext, key: impl Into<String>) -> Self {
        Self { ctx, key: key.into() }
    }

    /// The store key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stored identifier, generating and storing one first if
    /// none exists.
    ///
    /// The store is read exactly once. The generator and the store write
    /// run only when nothing usable is stored. An empty stored string is
    /// treated as missing and replaced.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Store`] if the read or write fails and
    /// [`InstallError::Generate`] if generation fails. Nothing is retried.
    pub fn install(&self) -> Result<ClientId, InstallError> {
        if let Some(existing) = self.current()? {
            debug!(key = %self.key, "client id already installed");
            return Ok(existing);
        }

        let id = self.ctx.id_gen.generate(&GenerationOptions::default())?;
        // The generated id is returned even if the store echoes something else.
        self.ctx.store.set(&self.key, &id)?;
        info!(key = %self.key, "installed new client id");
        Ok(id)
    }

    /// Returns the stored identifier without generating one.
    ///
    /// # Errors
    ///
    /// Returns [`InstallError::Store`] if the store cannot be read.
    pub fn current(&self) -> Result<Option<ClientId>, InstallError> {
        match self.ctx.store.get(&self.key)? {
            Some(value) if value.is_empty() => {
                warn!(key = %self.key, "stored client id is empty, treating as missing");
                Ok(None)
            }
            value => Ok(value),
        }
    }
}

/// Installs the client identifier under [`DEFAULT_STORE_KEY`].
///
/// # Errors
///
/// See [`ClientIdInstaller::install`].
pub fn install(ctx: &ServiceContext) -> Result<ClientId, InstallError> {
    ClientIdInstaller::new(ctx).install()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::{LiveIdGenerator, MemoryStore};
    use crate::error::{GenerateError, StoreError};
    use crate::ports::{IdGenerator, Store};

    /// Calls observed on the spy store, shared with the test body.
    #[derive(Default)]
    struct StoreCalls {
        gets: AtomicUsize,
        sets: Mutex<Vec<(String, String)>>,
    }

    struct SpyStore {
        stored: Option<String>,
        fail_set: bool,
        set_echo: Option<String>,
        calls: Arc<StoreCalls>,
    }

    impl Store for SpyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            self.calls.gets.fetch_add(1, Ordering::SeqCst);
            Ok(self.stored.clone())
        }

        fn set(&self, key: &str, value: &str) -> Result<String, StoreError> {
            self.calls.sets.lock().unwrap().push((key.to_string(), value.to_string()));
            if self.fail_set {
                return Err(StoreError::Backend("quota exceeded".into()));
            }
            Ok(self.set_echo.clone().unwrap_or_else(|| value.to_string()))
        }
    }

    /// Wraps the live generator and records what it returned.
    #[derive(Default)]
    struct SpyIdGenerator {
        returned: Arc<Mutex<Vec<ClientId>>>,
    }

    impl IdGenerator for SpyIdGenerator {
        fn generate(&self, options: &GenerationOptions) -> Result<ClientId, GenerateError> {
            let id = LiveIdGenerator::new().generate(options)?;
            self.returned.lock().unwrap().push(id.clone());
            Ok(id)
        }
    }

    struct Harness {
        ctx: ServiceContext,
        store_calls: Arc<StoreCalls>,
        generated: Arc<Mutex<Vec<ClientId>>>,
    }

    fn harness(stored: Option<&str>, fail_set: bool) -> Harness {
        let store_calls = Arc::new(StoreCalls::default());
        let gen = SpyIdGenerator::default();
        let generated = Arc::clone(&gen.returned);
        let store = SpyStore {
            stored: stored.map(String::from),
            fail_set,
            set_echo: None,
            calls: Arc::clone(&store_calls),
        };
        Harness { ctx: ServiceContext::new(Box::new(store), Box::new(gen)), store_calls, generated }
    }

    #[test]
    fn first_time_user_gets_a_generated_id() {
        let h = harness(None, false);

        let id = install(&h.ctx).unwrap();

        assert_eq!(h.store_calls.gets.load(Ordering::SeqCst), 1);
        let generated = h.generated.lock().unwrap().clone();
        assert_eq!(generated.len(), 1);
        assert_eq!(id, generated[0]);
        assert_eq!(id.len(), GenerationOptions::DEFAULT_LENGTH);
        let sets = h.store_calls.sets.lock().unwrap().clone();
        assert_eq!(sets, vec![(DEFAULT_STORE_KEY.to_string(), id)]);
    }

    #[test]
    fn returning_user_keeps_stored_id() {
        let h = harness(Some("foobar"), false);

        let id = install(&h.ctx).unwrap();

        assert_eq!(id, "foobar");
        assert_eq!(h.store_calls.gets.load(Ordering::SeqCst), 1);
        assert!(h.generated.lock().unwrap().is_empty());
        assert!(h.store_calls.sets.lock().unwrap().is_empty());
    }

    #[test]
    fn returns_generated_id_even_when_store_echoes_another_value() {
        let store_calls = Arc::new(StoreCalls::default());
        let gen = SpyIdGenerator::default();
        let generated = Arc::clone(&gen.returned);
        let store = SpyStore {
            stored: None,
            fail_set: false,
            set_echo: Some("normalized".into()),
            calls: Arc::clone(&store_calls),
        };
        let ctx = ServiceContext::new(Box::new(store), Box::new(gen));

        let id = install(&ctx).unwrap();

        assert_ne!(id, "normalized");
        assert_eq!(id, generated.lock().unwrap()[0]);
        assert_eq!(store_calls.sets.lock().unwrap()[0].1, id);
    }

    #[test]
    fn empty_stored_value_is_regenerated() {
        let h = harness(Some(""), false);

        let id = install(&h.ctx).unwrap();

        assert!(!id.is_empty());
        assert_eq!(h.generated.lock().unwrap().len(), 1);
        assert_eq!(h.store_calls.sets.lock().unwrap().len(), 1);
    }

    #[test]
    fn write_failure_propagates_without_retry() {
        let h = harness(None, true);

        let err = install(&h.ctx).unwrap_err();

        assert!(matches!(err, InstallError::Store(StoreError::Backend(_))), "{err:?}");
        assert_eq!(h.store_calls.sets.lock().unwrap().len(), 1);
        assert_eq!(h.generated.lock().unwrap().len(), 1);
    }

    #[test]
    fn custom_key_is_used_for_read_and_write() {
        let ctx = ServiceContext::new(Box::new(MemoryStore::new()), Box::new(LiveIdGenerator::new()));
        let installer = ClientIdInstaller::with_key(&ctx, "browserId");

        let id = installer.install().unwrap();

        assert_eq!(installer.key(), "browserId");
        assert_eq!(ctx.store.get("browserId").unwrap(), Some(id));
        assert_eq!(ctx.store.get(DEFAULT_STORE_KEY).unwrap(), None);
    }

    #[test]
    fn installing_twice_returns_the_same_id() {
        let ctx = ServiceContext::new(Box::new(MemoryStore::new()), Box::new(LiveIdGenerator::new()));

        let first = install(&ctx).unwrap();
        let second = install(&ctx).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn current_does_not_generate() {
        let h = harness(None, false);

        assert_eq!(ClientIdInstaller::new(&h.ctx).current().unwrap(), None);
        assert!(h.generated.lock().unwrap().is_empty());
        assert!(h.store_calls.sets.lock().unwrap().is_empty());
    }
}
