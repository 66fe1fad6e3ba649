//! Reading item descriptions from arguments, a file, or stdin.

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use tracing::debug;

use crate::args::PrintArgs;

/// Collects descriptions in priority order: positional items, `--file`, stdin.
pub fn read_descriptions(args: &PrintArgs) -> Result<Vec<String>> {
    if !args.items.is_empty() {
        return Ok(args.items.clone());
    }

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let descriptions = split_lines(&text);
    debug!(count = descriptions.len(), "Read item descriptions");
    Ok(descriptions)
}

/// One description per non-blank line, surrounding whitespace trimmed.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
