//! # receipt-core: Pure Receipt Logic
//!
//! Parses shopping-basket descriptions, prices them with sales tax and
//! import duty, and renders the receipt. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Receipt Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt (CLI binary)                         │   │
//! │  │    args / stdin / file ──► descriptions      stdout ◄── text   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  parser   │  │  pricing  │  │  basket   │  │   money   │  │   │
//! │  │   │ ParsedItem│─►│ TaxPolicy │─►│  Basket   │  │   Money   │  │   │
//! │  │   │           │  │PricedItem │  │  Receipt  │  │  TaxRate  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`parser`] - `"<qty> <name> at <cost>"` to [`ParsedItem`]
//! - [`pricing`] - [`TaxPolicy`] and per-item tax
//! - [`basket`] - [`Basket`], [`Receipt`] and batch generation
//! - [`money`] - Money in checked integer cents, exact decimal tax math
//! - [`types`] - Domain types
//! - [`validation`] - Token predicates and value checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{generate_receipt, TaxPolicy};
//!
//! let policy = TaxPolicy::default();
//! let receipt = generate_receipt(
//!     &policy,
//!     ["1 imported box of chocolates at 10.00", "1 imported bottle of perfume at 47.50"],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     receipt.to_string(),
//!     "1 imported box of chocolates: 10.50\n\
//!      1 imported bottle of perfume: 54.65\n\
//!      Sales Taxes: 7.65\n\
//!      Total: 65.15\n"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod error;
pub mod money;
pub mod parser;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use basket::{generate_receipt, Basket, Receipt, ReceiptLine};
pub use error::{CoreError, CoreResult, FormatError, ValidationError};
pub use money::Money;
pub use parser::parse;
pub use pricing::TaxPolicy;
pub use types::*;

/// Item costs are exact decimals; re-exported so callers need no extra import.
pub use rust_decimal::Decimal;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Taxes are rounded up to the next multiple of this amount (0.05).
pub const TAX_ROUNDING_INCREMENT: Money = Money::from_cents(5);
