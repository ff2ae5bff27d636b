//! Recording adapters that capture interactions to cassettes.

pub mod id_gen;
pub mod store;

pub use id_gen::RecordingIdGenerator;
pub use store::RecordingStore;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::format::Port;
use crate::cassette::recorder::CassetteRecorder;

/// Records one call on a recorder shared with the session.
pub(crate) fn record_call<I, T, E>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: Port,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    I: Serialize,
    T: Serialize,
    E: std::fmt::Display,
{
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, result);
}
