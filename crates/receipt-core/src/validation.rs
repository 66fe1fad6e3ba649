//! # Validation Module
//!
//! Token predicates and precondition checks shared by the parser and pricer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parser (FormatError)                                         │
//! │  ├── is_integer / is_real pattern checks on raw tokens                 │
//! │  └── token count, "at" keyword, non-empty name                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricer (ValidationError)                                     │
//! │  └── validate_name / validate_cost / validate_quantity                 │
//! │                                                                         │
//! │  Both layers run on every item: values built by hand skip layer 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{is_integer, is_real};
//!
//! assert!(is_integer("+3"));
//! assert!(is_real("12.49"));
//! assert!(!is_real("12.49a"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?[0-9]+$").unwrap_or_else(|e| panic!("Invalid integer regex: {e}"))
});

// Deliberately loose: accepts "1.2.3" and ",,," as well.
static REAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-*[0-9,.]+$").unwrap_or_else(|e| panic!("Invalid real regex: {e}")));

// =============================================================================
// Token Predicates
// =============================================================================

/// Returns true when `token` is an optionally signed run of digits.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_integer;
///
/// assert!(is_integer("1"));
/// assert!(is_integer("-12"));
/// assert!(!is_integer("1.0"));
/// assert!(!is_integer("book"));
/// ```
pub fn is_integer(token: &str) -> bool {
    INTEGER_PATTERN.is_match(token)
}

/// Returns true when `token` is made of leading dashes followed by digits,
/// commas and dots.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_real;
///
/// assert!(is_real("0.85"));
/// assert!(is_real("1,000.00"));
/// assert!(is_real("1.2.3"));
/// assert!(!is_real("+5"));
/// assert!(!is_real("1e5"));
/// ```
pub fn is_real(token: &str) -> bool {
    REAL_PATTERN.is_match(token)
}

// =============================================================================
// Precondition Helper
// =============================================================================

/// Fails with the error built by `err` unless `condition` holds.
///
/// ## Example
/// ```rust
/// use receipt_core::error::FormatError;
/// use receipt_core::validation::ensure;
///
/// let tokens = ["1", "book"];
/// let result = ensure(tokens.len() >= 4, || FormatError::TooFewTokens { found: tokens.len() });
/// assert_eq!(result, Err(FormatError::TooFewTokens { found: 2 }));
/// ```
pub fn ensure<E>(condition: bool, err: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        Err(err())
    }
}

// =============================================================================
// Value Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_name(name: &str) -> ValidationResult<()> {
    ensure(!name.trim().is_empty(), || ValidationError::Required {
        field: "name".to_string(),
    })
}

/// Validates a unit cost.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_cost(cost: Decimal) -> ValidationResult<()> {
    ensure(cost > Decimal::ZERO, || ValidationError::MustBePositive {
        field: "cost".to_string(),
    })
}

/// Validates a quantity value.
///
/// ## Rules
/// - Must be at least 1
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    ensure(qty >= 1, || ValidationError::MustBePositive {
        field: "quantity".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
