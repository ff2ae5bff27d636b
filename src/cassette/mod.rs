//! Cassettes: recorded store and generator interactions, replayable in tests.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
