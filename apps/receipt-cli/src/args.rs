//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "receipt")]
#[command(about = "Print a priced receipt for a shopping basket")]
#[command(long_about = "receipt - sales tax receipts for shopping baskets

Each item is described as \"<qty> <name> at <cost>\", for example:

  receipt print \"1 book at 12.49\" \"1 imported bottle of perfume at 47.50\"

Items can also be read from a file (--file) or from stdin, one per line.

ENVIRONMENT:
  RECEIPT_LOG      tracing filter for stderr logs (default: warn)
  RECEIPT_FORMAT   text or json (default: text)
  RECEIPT_HEADER   line printed before the receipt")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format, overrides RECEIPT_FORMAT
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for receipts.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain receipt text.
    #[default]
    Text,
    /// JSON document.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price the given items and print one receipt
    Print(PrintArgs),

    /// Print the three sample receipts
    Demo,
}

#[derive(Args, Debug, Default)]
pub struct PrintArgs {
    /// Item descriptions, e.g. "1 music CD at 14.99"
    pub items: Vec<String>,

    /// Read item descriptions from a file, one per line
    #[arg(short = 'i', long, value_name = "PATH", conflicts_with = "items")]
    pub file: Option<PathBuf>,

    /// Header line printed before the receipt, overrides RECEIPT_HEADER
    #[arg(long)]
    pub header: Option<String>,
}
