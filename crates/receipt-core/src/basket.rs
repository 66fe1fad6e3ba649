//! # Basket & Receipt
//!
//! Aggregates priced items and renders the receipt.
//!
//! ## Receipt Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  descriptions ──► parse ──► TaxPolicy::price ──► Basket::add_item      │
//! │                                                        │                │
//! │                                                        ▼                │
//! │                                              Basket::receipt()          │
//! │                                                        │                │
//! │                         ┌──────────────────────────────┘                │
//! │                         ▼                                               │
//! │   1 book: 12.49                         one line per item, in order     │
//! │   1 music CD: 16.49                                                     │
//! │   1 chocolate bar: 0.85                                                 │
//! │   Sales Taxes: 1.50                     Σ tax                           │
//! │   Total: 29.83                          Σ total                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Building a receipt only reads the basket, so it can be rendered any number
//! of times with identical output. The two sums are kept as checked running
//! totals: an item that would overflow them is rejected when it is added.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::parser::parse;
use crate::pricing::TaxPolicy;
use crate::types::PricedItem;

// =============================================================================
// Basket
// =============================================================================

/// Ordered collection of priced items making up one receipt.
///
/// The policy is borrowed; the basket owns its items and their sums.
#[derive(Debug, Clone)]
pub struct Basket<'p> {
    policy: &'p TaxPolicy,
    items: Vec<PricedItem>,
    sales_taxes: Money,
    total: Money,
}

impl<'p> Basket<'p> {
    /// Creates an empty basket priced under `policy`.
    pub fn new(policy: &'p TaxPolicy) -> Self {
        Basket {
            policy,
            items: Vec::new(),
            sales_taxes: Money::zero(),
            total: Money::zero(),
        }
    }

    /// Prices an item and appends it.
    ///
    /// ## Errors
    /// [`CoreError::Validation`] when the pricer rejects the values, or when
    /// the receipt sums would no longer fit in [`Money`]. The basket is left
    /// unchanged.
    pub fn add_item(
        &mut self,
        name: &str,
        cost: Decimal,
        quantity: i64,
        is_imported: bool,
    ) -> CoreResult<()> {
        let item = self.policy.price(name, cost, quantity, is_imported)?;
        let sales_taxes = self
            .sales_taxes
            .checked_add(item.tax)
            .ok_or_else(|| too_large("sales taxes"))?;
        let total = self
            .total
            .checked_add(item.total)
            .ok_or_else(|| too_large("total"))?;

        self.items.push(item);
        self.sales_taxes = sales_taxes;
        self.total = total;
        Ok(())
    }

    /// Parses a raw description, prices it and appends it.
    pub fn add_description(&mut self, description: &str) -> CoreResult<()> {
        let parsed = parse(description)?;
        self.add_item(&parsed.name, parsed.cost, parsed.quantity, parsed.is_imported)
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PricedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of taxes, accumulated in insertion order.
    pub fn sales_taxes(&self) -> Money {
        self.sales_taxes
    }

    /// Sum of line totals, accumulated in insertion order.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Builds the receipt for the current contents.
    pub fn receipt(&self) -> Receipt {
        Receipt {
            header: None,
            lines: self
                .items
                .iter()
                .map(|item| ReceiptLine {
                    label: item.label(),
                    amount: item.total,
                })
                .collect(),
            sales_taxes: self.sales_taxes,
            total: self.total,
        }
    }

    /// Renders the receipt text, one line per item then the two totals.
    pub fn render_receipt(&self) -> String {
        self.receipt().to_string()
    }
}

fn too_large(field: &str) -> CoreError {
    ValidationError::TooLarge {
        field: field.to_string(),
    }
    .into()
}

// =============================================================================
// Receipt
// =============================================================================

/// One printed item line: `<label>: <amount>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptLine {
    pub label: String,
    pub amount: Money,
}

/// A finished receipt.
///
/// `Display` prints the item lines and totals; the header is not part of the
/// text rendering and is printed separately by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub lines: Vec<ReceiptLine>,
    pub sales_taxes: Money,
    pub total: Money,
}

impl Receipt {
    /// Attaches a header line.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl fmt::Display for ReceiptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.amount)
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "Sales Taxes: {}", self.sales_taxes)?;
        writeln!(f, "Total: {}", self.total)
    }
}

// =============================================================================
// Batch Generation
// =============================================================================

/// Parses and prices every description, in order, into one receipt.
///
/// ## Errors
/// The first failing description aborts the whole receipt with
/// [`CoreError::InvalidItem`] carrying its 1-based position.
///
/// ## Example
/// ```rust
/// use receipt_core::basket::generate_receipt;
/// use receipt_core::pricing::TaxPolicy;
///
/// let policy = TaxPolicy::default();
/// let receipt = generate_receipt(&policy, ["1 book at 12.49", "1 music CD at 14.99"]).unwrap();
/// assert_eq!(receipt.to_string(), "1 book: 12.49\n1 music CD: 16.49\nSales Taxes: 1.50\nTotal: 28.98\n");
/// ```
pub fn generate_receipt<I, S>(policy: &TaxPolicy, descriptions: I) -> CoreResult<Receipt>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut basket = Basket::new(policy);

    for (idx, description) in descriptions.into_iter().enumerate() {
        let description = description.as_ref();
        basket
            .add_description(description)
            .map_err(|source| CoreError::InvalidItem {
                line: idx + 1,
                description: description.to_string(),
                source: Box::new(source),
            })?;
        debug!(line = idx + 1, "Added item to basket");
    }

    let receipt = basket.receipt();
    info!(
        items = basket.len(),
        sales_taxes = %receipt.sales_taxes,
        total = %receipt.total,
        "Receipt generated"
    );

    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use rust_decimal_macros::dec;

    const INPUT_1: [&str; 3] = ["1 book at 12.49", "1 music CD at 14.99", "1 chocolate bar at 0.85"];
    const INPUT_2: [&str; 2] = [
        "1 imported box of chocolates at 10.00",
        "1 imported bottle of perfume at 47.50",
    ];
    const INPUT_3: [&str; 4] = [
        "1 imported bottle of perfume at 27.99",
        "1 bottle of perfume at 18.99",
        "1 packet of headache pills at 9.75",
        "1 box of imported chocolates at 11.25",
    ];

    fn render(descriptions: &[&str]) -> String {
        generate_receipt(&TaxPolicy::default(), descriptions).unwrap().to_string()
    }

    #[test]
    fn test_scenario_1() {
        assert_eq!(
            render(&INPUT_1),
            "1 book: 12.49\n\
             1 music CD: 16.49\n\
             1 chocolate bar: 0.85\n\
             Sales Taxes: 1.50\n\
             Total: 29.83\n"
        );
    }

    #[test]
    fn test_scenario_2() {
        assert_eq!(
            render(&INPUT_2),
            "1 imported box of chocolates: 10.50\n\
             1 imported bottle of perfume: 54.65\n\
             Sales Taxes: 7.65\n\
             Total: 65.15\n"
        );
    }

    /// "box of imported chocolates" prints as "imported box of chocolates".
    #[test]
    fn test_scenario_3_imported_is_repositioned() {
        assert_eq!(
            render(&INPUT_3),
            "1 imported bottle of perfume: 32.19\n\
             1 bottle of perfume: 20.89\n\
             1 packet of headache pills: 9.75\n\
             1 imported box of chocolates: 11.85\n\
             Sales Taxes: 6.70\n\
             Total: 74.68\n"
        );
    }

    #[test]
    fn test_empty_basket() {
        let policy = TaxPolicy::default();
        let basket = Basket::new(&policy);
        assert!(basket.is_empty());
        assert_eq!(basket.render_receipt(), "Sales Taxes: 0.00\nTotal: 0.00\n");
    }

    #[test]
    fn test_render_is_idempotent() {
        let policy = TaxPolicy::default();
        let mut basket = Basket::new(&policy);
        for description in INPUT_2 {
            basket.add_description(description).unwrap();
        }
        assert_eq!(basket.render_receipt(), basket.render_receipt());
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn test_add_item_keeps_insertion_order() {
        let policy = TaxPolicy::default();
        let mut basket = Basket::new(&policy);
        basket.add_item("music CD", dec!(14.99), 1, false).unwrap();
        basket.add_item("book", dec!(12.49), 1, false).unwrap();

        let names: Vec<&str> = basket.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["music CD", "book"]);
        assert_eq!(basket.sales_taxes(), Money::from_cents(150));
        assert_eq!(basket.total(), Money::from_cents(2898));
    }

    #[test]
    fn test_rejected_item_leaves_basket_unchanged() {
        let policy = TaxPolicy::default();
        let mut basket = Basket::new(&policy);
        let err = basket.add_item("", dec!(1.00), 1, false).unwrap_err();
        assert!(err.as_validation().is_some());
        assert!(basket.is_empty());
    }

    #[test]
    fn test_quantity_is_printed_but_not_multiplied() {
        assert_eq!(
            render(&["3 book at 12.49"]),
            "3 book: 12.49\nSales Taxes: 0.00\nTotal: 12.49\n"
        );
    }

    #[test]
    fn test_sub_cent_cost_is_priced() {
        assert_eq!(
            render(&["1 music CD at 0.004"]),
            "1 music CD: 0.05
Sales Taxes: 0.05
Total: 0.05
"
        );
    }

    #[test]
    fn test_single_item_beyond_cent_range() {
        let err = generate_receipt(&TaxPolicy::default(), ["1 music CD at 90000000000000000"])
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidItem { line: 1, .. }));
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::TooLarge {
                field: "total".to_string()
            })
        );
    }

    #[test]
    fn test_receipt_total_overflow_is_rejected() {
        let big = "1 book at 50000000000000000";
        let err = generate_receipt(&TaxPolicy::default(), [big, big]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidItem { line: 2, .. }));
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::TooLarge {
                field: "total".to_string()
            })
        );

        let policy = TaxPolicy::default();
        let mut basket = Basket::new(&policy);
        basket.add_description(big).unwrap();
        assert!(basket.add_description(big).is_err());
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.total(), Money::from_cents(5_000_000_000_000_000_000));
    }

    #[test]
    fn test_malformed_description_aborts_receipt() {
        let err = generate_receipt(&TaxPolicy::default(), ["1 book at 12.49", "book at 12.49"])
            .unwrap_err();
        match &err {
            CoreError::InvalidItem { line, description, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(description, "book at 12.49");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.as_format(), Some(&FormatError::TooFewTokens { found: 3 }));
    }

    #[test]
    fn test_receipt_json() {
        let receipt = generate_receipt(&TaxPolicy::default(), ["1 book at 12.49"])
            .unwrap()
            .with_header("Output 1:");
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "header": "Output 1:",
                "lines": [{ "label": "1 book", "amount": "12.49" }],
                "sales_taxes": "0.00",
                "total": "12.49"
            })
        );
    }
}
