//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── FormatError      - Malformed description text (parser)            │
//! │  ├── ValidationError  - Semantically invalid values (pricer)           │
//! │  └── CoreError        - Either of the above, optionally tagged with    │
//! │                         the description that caused it                │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── anyhow::Error    - What the user sees on stderr                   │
//! │                                                                         │
//! │  Flow: FormatError / ValidationError → CoreError → anyhow → exit 1     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending token in error messages
//! 3. Errors are enum variants, never String
//! 4. A single failure aborts the whole receipt; there is no partial result

use thiserror::Error;

// =============================================================================
// Format Error
// =============================================================================

/// A description does not follow the `<qty> <name words...> at <cost>` grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer than four whitespace-delimited tokens.
    #[error("expected item in the form [qty] [item name] at [cost], found {found} token(s)")]
    TooFewTokens { found: usize },

    /// The second-to-last token is not the literal `at`.
    #[error("expected item in the form [qty] [item name] at [cost], missing \"at\" (found {found:?})")]
    MissingAt { found: String },

    /// Quantity token is not an integer.
    #[error("quantity is not an integer: {token:?}")]
    InvalidQuantity { token: String },

    /// Quantity is an integer but does not fit in 64 bits.
    #[error("quantity is too large: {token:?}")]
    QuantityTooLarge { token: String },

    /// Quantity parsed but is zero or negative.
    #[error("quantity must be greater than 0: {token:?}")]
    NonPositiveQuantity { token: String },

    /// Cost token is not a number.
    #[error("cost is not a number: {token:?}")]
    InvalidCost { token: String },

    /// Cost is a number but its whole part exceeds the decimal range.
    #[error("cost is too large: {token:?}")]
    CostTooLarge { token: String },

    /// Cost parsed but is zero or negative.
    #[error("cost must be greater than 0: {token:?}")]
    NonPositiveCost { token: String },

    /// Nothing is left of the item name once `imported` is removed.
    #[error("item name must be supplied")]
    EmptyName,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Semantically invalid values handed to the pricer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Amount does not fit in the cent range of [`Money`](crate::money::Money).
    #[error("{field} is too large")]
    TooLarge { field: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by receipt generation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed description.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Invalid item values.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A description in a batch failed; `line` is 1-based.
    ///
    /// ## User Workflow
    /// ```text
    /// generate_receipt(["1 book at 12.49", "book at 12.49"])
    ///      │
    ///      ▼
    /// line 2 fails to parse
    ///      │
    ///      ▼
    /// InvalidItem { line: 2, description: "book at 12.49", source: Format(..) }
    ///      │
    ///      ▼
    /// No receipt is produced
    /// ```
    #[error("item {line} ({description:?}) rejected")]
    InvalidItem {
        line: usize,
        description: String,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Returns the underlying format error, looking through `InvalidItem`.
    pub fn as_format(&self) -> Option<&FormatError> {
        match self {
            CoreError::Format(e) => Some(e),
            CoreError::InvalidItem { source, .. } => source.as_format(),
            CoreError::Validation(_) => None,
        }
    }

    /// Returns the underlying validation error, looking through `InvalidItem`.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            CoreError::Validation(e) => Some(e),
            CoreError::InvalidItem { source, .. } => source.as_validation(),
            CoreError::Format(_) => None,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
