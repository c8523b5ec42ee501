//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only client for the SAUR water-utility API.
#[derive(Parser, Debug)]
#[command(name = "saur", version, about)]
pub struct Cli {
    /// Path to the credentials file (JSON with login/mdp, optionally a
    /// cached token/unique_id).
    #[arg(long, global = true, env = "SAUR_CREDENTIALS_FILE")]
    pub credentials: Option<PathBuf>,

    /// Target the local development endpoint instead of production.
    #[arg(long, global = true, env = "SAUR_DEV_MODE")]
    pub dev: bool,

    /// Override the API base URL.
    #[arg(long, global = true, env = "SAUR_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, env = "SAUR_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum re-authentication retries on token rejection.
    #[arg(long, global = true, env = "SAUR_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Weekly consumption for the week containing a date (defaults to today).
    Weekly {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        day: Option<u32>,
    },
    /// Monthly consumption (defaults to the current month).
    Monthly {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
    /// Last known meter reading.
    LastReading,
    /// Delivery points for the account's section.
    DeliveryPoints,
    /// Contract tree for the account's section.
    Contracts,
}
