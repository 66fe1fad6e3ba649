//! # Domain Types
//!
//! Core domain types used throughout receipt generation.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  "1 imported bottle of perfume at 47.50"                                │
//! │           │ parser::parse                                               │
//! │           ▼                                                             │
//! │  ┌─────────────────┐   pricing::price   ┌─────────────────┐            │
//! │  │   ParsedItem    │ ─────────────────► │   PricedItem    │            │
//! │  │  ─────────────  │                    │  ─────────────  │            │
//! │  │  quantity       │                    │  item           │            │
//! │  │  name           │                    │  tax            │            │
//! │  │  cost           │                    │  total          │            │
//! │  │  is_imported    │                    └─────────────────┘            │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │  bps (u32): 1000 = 10%, 500 = 5%                   │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::Serialize;
use std::ops::Add;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000. Adding 500 bps of import duty to
/// 1000 bps of sales tax gives exactly 1500 bps, with no float residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction: 1500 bps is `0.15`.
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

/// Rates compose additively: import duty + sales tax.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

// =============================================================================
// Parsed Item
// =============================================================================

/// A description broken into its parts. Transient: produced by the parser and
/// handed straight to the pricer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    /// Leading integer of the description, always > 0.
    pub quantity: i64,

    /// Name words joined by single spaces, with one `imported` token removed.
    pub name: String,

    /// Whether an `imported` token was present among the name words.
    pub is_imported: bool,

    /// Unit cost, always > 0, with every decimal digit the description gave.
    pub cost: Decimal,
}

// =============================================================================
// Priced Item
// =============================================================================

/// A parsed item with its taxes applied. Owned by the basket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedItem {
    pub quantity: i64,
    pub name: String,
    pub is_imported: bool,
    pub cost: Decimal,

    /// Sales tax plus import duty, rounded up to the nearest 0.05.
    pub tax: Money,

    /// `cost + tax` rounded to the cent.
    pub total: Money,
}

impl PricedItem {
    /// Label printed before the colon: `1 imported box of chocolates`.
    ///
    /// `imported` always follows the quantity, wherever it appeared in the
    /// original description.
    pub fn label(&self) -> String {
        if self.is_imported {
            format!("{} imported {}", self.quantity, self.name)
        } else {
            format!("{} {}", self.quantity, self.name)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
