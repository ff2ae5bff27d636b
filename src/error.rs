//! Error types for generation, storage, and installation.

use thiserror::Error;

/// Errors raised while generating a client identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Both letters and numbers were disabled, leaving nothing to sample from.
    #[error("cannot generate a client id: letters and numbers are both disabled")]
    EmptyAlphabet,
    /// A length of zero was requested.
    #[error("cannot generate a client id: length must be at least 1")]
    ZeroLength,
    /// A failure replayed from a recorded cassette.
    #[error("{0}")]
    Recorded(String),
}

/// Errors raised by a [`Store`](crate::ports::Store) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing storage holds data that cannot be decoded.
    #[error("store contents are corrupt: {0}")]
    Corrupt(String),
    /// Any other backend failure.
    #[error("{0}")]
    Backend(String),
}

/// Errors raised by [`ClientIdInstaller::install`](crate::install::ClientIdInstaller::install).
#[derive(Debug, Error)]
pub enum InstallError {
    /// Reading or writing the store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Generating a fresh identifier failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
