//! Generate a random client identifier and keep it in a key-value store.
//!
//! [`generator::generate_client_id`] builds an identifier from letters
//! and/or digits. [`install::ClientIdInstaller`] returns the identifier
//! already in a store, or generates and stores one on first use. The
//! store and generator are reached through the traits in [`ports`] and
//! supplied via a [`context::ServiceContext`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod install;
pub mod logging;
pub mod ports;

pub use context::ServiceContext;
pub use error::{GenerateError, InstallError, StoreError};
pub use generator::{generate_client_id, ClientId, GenerationOptions};
pub use install::{install, ClientIdInstaller, DEFAULT_STORE_KEY};
pub use ports::{IdGenerator, Store};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are successful exits.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    logging::init(cli.verbose);
    commands::dispatch(&cli.command)
}
