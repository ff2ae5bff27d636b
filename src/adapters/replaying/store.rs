//! Replaying adapter for the `Store` port.

use std::sync::Mutex;

use super::replay_call;
use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;
use crate::error::StoreError;
use crate::ports::Store;

/// Replays recorded store reads and writes from a cassette.
///
/// Keys and values passed in are ignored; outputs come from the cassette
/// in recorded order.
pub struct ReplayingStore {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingStore {
    /// Creates a replaying store from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Store for ReplayingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        replay_call(&self.replayer, Port::Store, "get").map_err(StoreError::Backend)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<String, StoreError> {
        replay_call(&self.replayer, Port::Store, "set").map_err(StoreError::Backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Outcome;

    #[test]
    fn replays_absent_then_present() {
        let store = ReplayingStore::new(make_replayer(vec![
            (Port::Store, "get", Outcome::ok(None::<String>)),
            (Port::Store, "set", Outcome::ok("foobar")),
            (Port::Store, "get", Outcome::ok("foobar")),
        ]));
        assert_eq!(store.get("clientId").unwrap(), None);
        assert_eq!(store.set("clientId", "foobar").unwrap(), "foobar");
        assert_eq!(store.get("clientId").unwrap().as_deref(), Some("foobar"));
    }

    #[test]
    fn replays_write_failure() {
        let store = ReplayingStore::new(make_replayer(vec![(
            Port::Store,
            "set",
            Outcome::err("read-only filesystem"),
        )]));
        let err = store.set("clientId", "x").unwrap_err();
        assert_eq!(err.to_string(), "read-only filesystem");
    }

    #[test]
    #[should_panic(expected = "Cassette exhausted")]
    fn unrecorded_call_panics() {
        let store = ReplayingStore::new(make_replayer(vec![]));
        let _ = store.get("clientId");
    }
}
