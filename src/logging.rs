//! Log output for the CLI.
//!
//! Logs go to stderr so stdout carries only command output. The filter
//! comes from `CLIENTID_LOG` unless `-v` flags ask for more.

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Maps a `-v` count to a filter directive, or `None` to defer to the
/// environment.
#[must_use]
pub fn verbosity_directive(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    let filter = match verbosity_directive(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
