//! # Description Parser
//!
//! Turns `"<qty> <name words...> at <cost>"` into a [`ParsedItem`].
//!
//! ## Token Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   "1  box  of  imported  chocolates  at  11.25"                         │
//! │    │  └──────────── name ───────────┘  │    │                           │
//! │    0           1 ..= n-3              n-2  n-1                          │
//! │   qty                                 "at" cost                         │
//! │                                                                         │
//! │   name words scanned case-insensitively for "imported":                 │
//! │     first hit removed in place → "box of chocolates", imported = true   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The removed token is not re-inserted here. The receipt prints `imported`
//! right after the quantity, so `box of imported chocolates` comes out as
//! `imported box of chocolates`.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::FormatError;
use crate::money::read_decimal_prefix;
use crate::types::ParsedItem;
use crate::validation::{ensure, is_integer, is_real};

/// Keyword that must sit between the name and the cost.
const AT_KEYWORD: &str = "at";

/// Name token flagging the item as imported.
const IMPORTED_KEYWORD: &str = "imported";

/// Parses one item description.
///
/// ## Errors
/// [`FormatError`] when the description has fewer than four tokens, lacks
/// `at` before the cost, has a quantity or cost that is not a positive
/// number or is too large to represent, or has nothing left for a name.
///
/// ## Example
/// ```rust
/// use receipt_core::parser::parse;
///
/// let item = parse("1 imported bottle of perfume at 47.50").unwrap();
/// assert_eq!(item.quantity, 1);
/// assert_eq!(item.name, "bottle of perfume");
/// assert!(item.is_imported);
/// assert_eq!(item.cost.to_string(), "47.50");
/// ```
pub fn parse(description: &str) -> Result<ParsedItem, FormatError> {
    let tokens: Vec<&str> = description.split_whitespace().collect();
    let n = tokens.len();

    ensure(n >= 4, || FormatError::TooFewTokens { found: n })?;
    ensure(tokens[n - 2] == AT_KEYWORD, || FormatError::MissingAt {
        found: tokens[n - 2].to_string(),
    })?;

    let quantity = parse_quantity(tokens[0])?;
    let cost = parse_cost(tokens[n - 1])?;

    let mut name_words = tokens[1..n - 2].to_vec();
    let imported_at = name_words
        .iter()
        .position(|word| word.eq_ignore_ascii_case(IMPORTED_KEYWORD));
    if let Some(idx) = imported_at {
        name_words.remove(idx);
    }

    ensure(!name_words.is_empty(), || FormatError::EmptyName)?;

    let item = ParsedItem {
        quantity,
        name: name_words.join(" "),
        is_imported: imported_at.is_some(),
        cost,
    };

    debug!(
        quantity = item.quantity,
        name = %item.name,
        imported = item.is_imported,
        cost = %item.cost,
        "Parsed item description"
    );

    Ok(item)
}

fn parse_quantity(token: &str) -> Result<i64, FormatError> {
    let non_positive = || FormatError::NonPositiveQuantity {
        token: token.to_string(),
    };

    ensure(is_integer(token), || FormatError::InvalidQuantity {
        token: token.to_string(),
    })?;
    // The pattern already guarantees digits, so a failed parse is overflow.
    let quantity: i64 = token.parse().map_err(|_| {
        if token.starts_with('-') {
            non_positive()
        } else {
            FormatError::QuantityTooLarge {
                token: token.to_string(),
            }
        }
    })?;
    ensure(quantity > 0, non_positive)?;

    Ok(quantity)
}

fn parse_cost(token: &str) -> Result<Decimal, FormatError> {
    ensure(is_real(token), || FormatError::InvalidCost {
        token: token.to_string(),
    })?;
    let cost = read_decimal_prefix(token).ok_or_else(|| FormatError::CostTooLarge {
        token: token.to_string(),
    })?;
    ensure(cost > Decimal::ZERO, || FormatError::NonPositiveCost {
        token: token.to_string(),
    })?;

    Ok(cost)
}

// =============================================================================
// Unit Tests
// =============================================================================
