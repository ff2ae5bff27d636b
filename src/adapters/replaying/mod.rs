//! Replaying adapters that serve recorded interactions.

pub mod id_gen;
pub mod store;

pub use id_gen::ReplayingIdGenerator;
pub use store::ReplayingStore;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::format::Port;
use crate::cassette::replayer::CassetteReplayer;

/// Serves the next recorded result for `port::method`.
///
/// # Panics
///
/// Panics if the cassette is exhausted or the recorded value does not fit
/// `T`; both mean the cassette is out of date.
pub(crate) fn replay_call<T: DeserializeOwned>(
    replayer: &Mutex<CassetteReplayer>,
    port: Port,
    method: &str,
) -> Result<T, String> {
    let outcome = replayer.lock().expect("replayer lock poisoned").next_outcome(port, method);
    outcome.decode().unwrap_or_else(|e| {
        panic!("{port}::{method}: recorded output does not match the expected type: {e}")
    })
}
