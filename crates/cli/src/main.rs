//! SAUR CLI - command-line access to the SAUR water-utility API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute read-only API queries via the shared client library.
//! - Print raw JSON payloads to stdout for scripting.
//!
//! Does NOT handle:
//! - Authentication and retry logic (see `crates/client`).
//! - Configuration precedence rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so clap env defaults can
//!   read `.env` values.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use error::{exit_code_for, ExitCode};
use saur_config::ConfigLoader;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = commands::run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code_for(&e).as_i32());
    }
}
