//! Recording adapter for the `Store` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_call;
use crate::cassette::format::Port;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::StoreError;
use crate::ports::Store;

/// Records store calls while delegating to an inner implementation.
pub struct RecordingStore {
    inner: Box<dyn Store>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingStore {
    /// Wraps `inner`, recording into `recorder`.
    #[must_use]
    pub fn new(inner: Box<dyn Store>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct GetInput<'a> {
    key: &'a str,
}

#[derive(Serialize)]
struct SetInput<'a> {
    key: &'a str,
    value: &'a str,
}

impl Store for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let result = self.inner.get(key);
        record_call(&self.recorder, Port::Store, "get", &GetInput { key }, &result);
        result
    }

    fn set(&self, key: &str, value: &str) -> Result<String, StoreError> {
        let result = self.inner.set(key, value);
        record_call(&self.recorder, Port::Store, "set", &SetInput { key, value }, &result);
        result
    }
}
