//! # Item Pricing
//!
//! Applies sales tax and import duty to one item under a [`TaxPolicy`].
//!
//! ## Rate Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        exempt name?                                     │
//! │                      no            yes                                  │
//! │                 ┌────────────┬────────────┐                            │
//! │   imported? no  │   10%      │    0%      │                            │
//! │             yes │   15%      │    5%      │                            │
//! │                 └────────────┴────────────┘                            │
//! │                                                                         │
//! │   tax   = round_up(cost × rate, 0.05)     ← one rounding, combined     │
//! │   total = round(cost + tax, 0.01)         ← cost keeps all its digits  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity is validated but does not scale cost, tax or total: each basket
//! line is priced as a single unit.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{PricedItem, TaxRate};
use crate::validation::{validate_cost, validate_name, validate_quantity};
use crate::TAX_ROUNDING_INCREMENT;

/// Names that carry no sales tax in the standard policy.
pub const STANDARD_EXEMPT_CATEGORIES: [&str; 4] = [
    "book",
    "chocolate bar",
    "box of chocolates",
    "packet of headache pills",
];

/// Standard sales tax: 10%.
pub const STANDARD_SALES_TAX: TaxRate = TaxRate::from_bps(1000);

/// Standard import duty: 5%.
pub const STANDARD_IMPORT_DUTY: TaxRate = TaxRate::from_bps(500);

// =============================================================================
// Tax Policy
// =============================================================================

/// Immutable tax configuration passed explicitly to the pricer.
///
/// ## Fields
/// - `sales_tax_rate`: charged unless the name is exempt
/// - `import_duty_rate`: charged on every imported item, exempt or not
/// - `exempt_categories`: compared to the parsed name by exact,
///   case-sensitive equality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPolicy {
    pub sales_tax_rate: TaxRate,
    pub import_duty_rate: TaxRate,
    pub exempt_categories: BTreeSet<String>,
}

impl Default for TaxPolicy {
    /// 10% sales tax, 5% import duty, books, food and medicine exempt.
    fn default() -> Self {
        TaxPolicy {
            sales_tax_rate: STANDARD_SALES_TAX,
            import_duty_rate: STANDARD_IMPORT_DUTY,
            exempt_categories: STANDARD_EXEMPT_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl TaxPolicy {
    /// Checks whether `name` is one of the exempt categories.
    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt_categories.contains(name)
    }

    /// Combined rate for an item.
    pub fn rate_for(&self, name: &str, is_imported: bool) -> TaxRate {
        let import = if is_imported {
            self.import_duty_rate
        } else {
            TaxRate::zero()
        };
        let sales = if self.is_exempt(name) {
            TaxRate::zero()
        } else {
            self.sales_tax_rate
        };

        trace!(
            item = name,
            import_bps = import.bps(),
            sales_bps = sales.bps(),
            "Composed tax rate"
        );

        import + sales
    }

    /// Prices one item.
    ///
    /// ## Errors
    /// [`ValidationError`] when `name` is empty, `cost` is not positive,
    /// `quantity` is below 1, or the tax or total does not fit in
    /// [`Money`].
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::pricing::TaxPolicy;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = TaxPolicy::default();
    /// let item = policy
    ///     .price("bottle of perfume", Decimal::new(4750, 2), 1, true)
    ///     .unwrap();
    /// assert_eq!(item.tax.to_string(), "7.15");
    /// assert_eq!(item.total.to_string(), "54.65");
    /// ```
    pub fn price(
        &self,
        name: &str,
        cost: Decimal,
        quantity: i64,
        is_imported: bool,
    ) -> Result<PricedItem, ValidationError> {
        validate_name(name)?;
        validate_cost(cost)?;
        validate_quantity(quantity)?;

        let rate = self.rate_for(name, is_imported);
        let tax = Money::calculate_tax_rounded_up(cost, rate, TAX_ROUNDING_INCREMENT)
            .ok_or_else(|| too_large("tax"))?;
        let total = cost
            .checked_add(tax.to_decimal())
            .and_then(Money::from_decimal)
            .ok_or_else(|| too_large("total"))?;

        debug!(
            item = name,
            rate_pct = rate.percentage(),
            cost = %cost,
            tax = %tax,
            total = %total,
            "Priced item"
        );

        Ok(PricedItem {
            quantity,
            name: name.to_string(),
            is_imported,
            cost,
            tax,
            total,
        })
    }
}

fn too_large(field: &str) -> ValidationError {
    ValidationError::TooLarge {
        field: field.to_string(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
