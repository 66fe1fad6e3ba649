//! Subcommand handlers. Each returns the full text destined for stdout.

use anyhow::{Context, Result};
use receipt_core::{generate_receipt, Receipt, TaxPolicy};

use crate::args::{OutputFormat, PrintArgs};
use crate::input::read_descriptions;

/// Sample baskets printed by `receipt demo`.
pub const DEMO_BASKETS: [(&str, &[&str]); 3] = [
    (
        "Output 1:",
        &[
            "1 book at 12.49",
            "1 music CD at 14.99",
            "1 chocolate bar at 0.85",
        ],
    ),
    (
        "Output 2:",
        &[
            "1 imported box of chocolates at 10.00",
            "1 imported bottle of perfume at 47.50",
        ],
    ),
    (
        "Output 3:",
        &[
            "1 imported bottle of perfume at 27.99",
            "1 bottle of perfume at 18.99",
            "1 packet of headache pills at 9.75",
            "1 box of imported chocolates at 11.25",
        ],
    ),
];

/// `receipt print`
pub fn print(
    policy: &TaxPolicy,
    args: &PrintArgs,
    header: Option<String>,
    format: OutputFormat,
) -> Result<String> {
    let descriptions = read_descriptions(args)?;
    let mut receipt =
        generate_receipt(policy, &descriptions).context("failed to generate receipt")?;
    receipt.header = header;

    match format {
        OutputFormat::Text => Ok(render_text(&[receipt])),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&receipt)? + "\n"),
    }
}

/// `receipt demo`
pub fn demo(policy: &TaxPolicy, format: OutputFormat) -> Result<String> {
    let receipts = DEMO_BASKETS
        .iter()
        .map(|(header, descriptions)| {
            generate_receipt(policy, *descriptions)
                .map(|receipt| receipt.with_header(*header))
                .with_context(|| format!("failed to generate {header}"))
        })
        .collect::<Result<Vec<_>>>()?;

    match format {
        OutputFormat::Text => Ok(render_text(&receipts)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&receipts)? + "\n"),
    }
}

/// Receipts separated by a blank line, each preceded by its header if set.
fn render_text(receipts: &[Receipt]) -> String {
    receipts
        .iter()
        .map(|receipt| match &receipt.header {
            Some(header) => format!("{header}\n{receipt}"),
            None => receipt.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
