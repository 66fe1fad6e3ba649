//! # receipt
//!
//! Command line front end for receipt-core.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CliConfig::load (env) ──┐                                              │
//! │                          ├──► format / header / log filter              │
//! │  Cli::parse (flags) ─────┘                                              │
//! │                                                                         │
//! │  print: args | --file | stdin ──► generate_receipt ──► stdout           │
//! │  demo:  three sample baskets  ──► generate_receipt ──► stdout           │
//! │                                                                         │
//! │  any error ──► stderr, exit 1, nothing on stdout                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod args;
mod commands;
mod config;
mod input;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use receipt_core::TaxPolicy;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};
use crate::config::CliConfig;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;
    init_tracing(&config.log_filter);

    let format = cli.format.unwrap_or(config.format);
    let policy = TaxPolicy::default();
    info!(?format, "Starting receipt");

    let output = match cli.command {
        Commands::Print(args) => {
            let header = args.header.clone().or(config.header);
            commands::print(&policy, &args, header, format)?
        }
        Commands::Demo => commands::demo(&policy, format)?,
    };

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write receipt")?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RECEIPT_LOG=debug` - Show every parsed and priced item
/// - `RECEIPT_LOG=receipt_core=trace` - Include rate composition
/// - Default: WARN level
///
/// Logs go to stderr so stdout only ever holds the receipt.
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
