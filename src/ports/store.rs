//! Store port for key-value persistence of the client identifier.

use crate::error::StoreError;

/// A key-value store holding string values.
///
/// The store is owned by the caller and handed to the installer; the
/// installer never keeps it beyond a single call.
pub trait Store: Send + Sync {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`, returning the value written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<String, StoreError>;
}
