//! # lexmd
//!
//! **CLI Binary**
//!
//! This is the entry point for the `lexmd` command-line application.
//! It orchestrates the other crates to turn tokenized text files into
//! indicator reports.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Resolve settings (`--config`, `lexmd.toml`, flags)
//! * Read input documents
//! * Dispatch to `lexmd-core` and print the rendered output
//!
//! This crate should contain minimal business logic.

mod cli;
mod commands;
mod config;
mod error_hints;
mod input;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LEXMD_LOG";

pub fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);
    commands::dispatch(cli)
}

/// Render an error with its context chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
