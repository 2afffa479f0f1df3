//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use findmypet::config::{DEFAULT_API_URL, DEFAULT_TIMEOUT};

use crate::commands::Commands;

/// FindMyPet command line client.
#[derive(Parser, Debug)]
#[command(name = "findmypet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Backend base URL
    #[arg(long, env = "FINDMYPET_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "FINDMYPET_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs(), global = true)]
    pub timeout_secs: u64,

    /// Credentials file (defaults to the user data directory)
    #[arg(long, env = "FINDMYPET_CREDENTIALS", global = true)]
    pub credentials_file: Option<PathBuf>,
}
