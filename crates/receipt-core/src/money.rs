//! # Money Module
//!
//! Provides the `Money` type for receipt amounts and the exact decimal
//! arithmetic that produces them.
//!
//! ## Why Not Floats?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Import duty + sales tax as floats:                                     │
//! │    0.05 + 0.10 = 0.15000000000000002                                   │
//! │                                                                         │
//! │  Rounding UP makes the error visible:                                   │
//! │    ceil(20.00 × 0.15000000000000002 × 20) = 61  → tax $3.05  ❌        │
//! │                                                                         │
//! │  OUR SOLUTION: Decimal cost × Decimal rate                              │
//! │    ceil(20.00 × 0.15 / 0.05) = 60              → tax $3.00  ✅         │
//! │                                                                         │
//! │  cost  : Decimal, every digit the description carries                   │
//! │  tax   : Money, a whole number of increments                            │
//! │  total : Money, cost + tax rounded to the cent                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Money;
//!
//! let price = Money::from_cents(1499); // 14.99
//! let total = price.checked_add(Money::from_cents(150)).unwrap();
//! assert_eq!(total.to_string(), "16.49");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::types::TaxRate;

/// Largest number of fractional digits a `Decimal` holds.
const MAX_SCALE: u32 = 28;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the cent range of a receipt line
/// - **Checked arithmetic only**: no `Add`/`Sum`, every addition reports overflow
/// - **Serialize as a string**: `"16.49"`, identical to the receipt text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    ///
    /// let price = Money::from_cents(1249); // Represents 12.49
    /// assert_eq!(price.cents(), 1249);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds `amount` to the cent, halves away from zero.
    ///
    /// Returns `None` when the rounded amount does not fit in `i64` cents.
    pub fn from_decimal(amount: Decimal) -> Option<Money> {
        amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Exact decimal value of this amount.
    #[inline]
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Calculates tax on `cost`, rounding UP to the next multiple of
    /// `increment`.
    ///
    /// ## Round-Up Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  tax = ceil(cost × rate / increment) × increment                    │
    /// │                                                                     │
    /// │  14.99 @ 10%  → 1.499   → 1.50                                      │
    /// │  47.50 @ 15%  → 7.125   → 7.15                                      │
    /// │  10.00 @ 5%   → 0.50    → 0.50   (already a multiple: unchanged)    │
    /// │  0.004 @ 10%  → 0.0004  → 0.05                                      │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The combined rate is rounded once, never each component separately.
    /// A non-positive `increment` is treated as one cent. Returns `None`
    /// when the tax does not fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Money;
    /// use receipt_core::types::TaxRate;
    /// use rust_decimal::Decimal;
    ///
    /// let cost = Decimal::new(1499, 2);
    /// let tax = Money::calculate_tax_rounded_up(cost, TaxRate::from_bps(1000), Money::from_cents(5));
    /// assert_eq!(tax.map(|t| t.cents()), Some(150));
    /// ```
    pub fn calculate_tax_rounded_up(
        cost: Decimal,
        rate: TaxRate,
        increment: Money,
    ) -> Option<Money> {
        let step = Money::from_cents(increment.0.max(1)).to_decimal();
        let steps = cost
            .checked_mul(rate.as_fraction())?
            .checked_div(step)?
            .ceil();

        Money::from_decimal(steps.checked_mul(step)?)
    }
}

// =============================================================================
// Cost Reading
// =============================================================================

/// Reads the leading decimal number of `text` at full precision.
///
/// ## Reading Rules
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────┐
/// │  Input      Prefix read    Result                                   │
/// │  ─────────  ─────────────  ──────                                   │
/// │  "12.49"    "12.49"        12.49                                    │
/// │  "1.2.3"    "1.2"          1.2     (stops at the second '.')        │
/// │  "1,000"    "1"            1       (stops at ',')                   │
/// │  ".5"       ".5"           0.5                                      │
/// │  "-5"       "-5"           -5                                       │
/// │  "--5"      "-"            0                                        │
/// │  "0.004"    "0.004"        0.004   (no rounding)                    │
/// └─────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Fractional digits beyond what a `Decimal` can hold are truncated.
/// Returns `None` only when the whole part exceeds the `Decimal` range.
///
/// ## Example
/// ```rust
/// use receipt_core::money::read_decimal_prefix;
/// use rust_decimal::Decimal;
///
/// assert_eq!(read_decimal_prefix("14.99"), Some(Decimal::new(1499, 2)));
/// assert_eq!(read_decimal_prefix("1,5"), Some(Decimal::ONE));
/// ```
pub fn read_decimal_prefix(text: &str) -> Option<Decimal> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_digits, rest) = rest.split_at(int_len);

    let frac_digits = match rest.strip_prefix('.') {
        Some(frac) => {
            let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
            &frac[..frac_len]
        }
        None => "",
    };

    let mut mantissa: i128 = 0;
    for digit in int_digits.bytes() {
        mantissa = mantissa
            .checked_mul(10)?
            .checked_add(i128::from(digit - b'0'))?;
    }

    let mut scale = 0;
    for digit in frac_digits.bytes().take(MAX_SCALE as usize) {
        match mantissa
            .checked_mul(10)
            .and_then(|m| m.checked_add(i128::from(digit - b'0')))
        {
            Some(m) => {
                mantissa = m;
                scale += 1;
            }
            None => break,
        }
    }

    // Drop trailing fractional digits until the mantissa fits in 96 bits.
    loop {
        match Decimal::try_from_i128_with_scale(mantissa, scale) {
            Ok(value) => return Some(if negative { -value } else { value }),
            Err(_) if scale > 0 => {
                mantissa /= 10;
                scale -= 1;
            }
            Err(_) => return None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering as printed on the receipt: `16.49`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
