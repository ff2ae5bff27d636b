//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::generator::GenerationOptions;

/// Top-level CLI parser for `clientid`.
#[derive(Debug, Parser)]
#[command(name = "clientid", version, about = "Generate and persist a client identifier")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a fresh identifier without touching the store.
    Generate {
        /// Number of characters.
        #[arg(short, long, default_value_t = GenerationOptions::DEFAULT_LENGTH)]
        length: usize,
        /// Leave letters out of the alphabet.
        #[arg(long)]
        no_letters: bool,
        /// Leave digits out of the alphabet.
        #[arg(long)]
        no_numbers: bool,
    },
    /// Print the stored identifier, creating it on first use.
    Install(StoreArgs),
    /// Print the stored identifier, if any, without creating one.
    Show(StoreArgs),
}

/// Store selection shared by commands that read the store.
#[derive(Debug, Clone, Default, Args)]
pub struct StoreArgs {
    /// Path of the JSON store file (overrides `CLIENTID_STORE`).
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,
    /// Key the identifier is stored under (overrides `CLIENTID_KEY`).
    #[arg(long)]
    pub key: Option<String>,
}
