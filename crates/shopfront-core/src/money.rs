//! # Money Module
//!
//! Provides the `Money` type for prices, subtotals and receipt totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With f64 prices:                                                       │
//! │    100000.0 * 0.9 * 3 = 270000.00000000006  ❌                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis-Point Discounts                    │
//! │    10_000_000 cents - 10% (1000 bps) = 9_000_000 cents                  │
//! │    9_000_000 × 3 = 27_000_000 cents = 270000.00  ✅                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopfront_core::money::Money;
//!
//! let price = Money::from_major(1000);        // 1000.00
//! let line = price * 3;                       // 3000.00
//! assert_eq!(line.cents(), 300_000);
//! assert_eq!(line.to_string(), "$3000.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► discounted_price() ──► × quantity ──► ReceiptLine.subtotal
///                                                                   │
///                                                Receipt.total ◄────┘ (Σ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// Seed prices are all whole amounts, so this is how the catalog is built.
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion, always 0-99.
    #[inline]
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the reduced amount.
    ///
    /// The discount amount is rounded half-up to the nearest cent using
    /// integer math: `(cents * bps + 5000) / 10000`. `i128` keeps large
    /// amounts from overflowing in the intermediate product.
    ///
    /// ```rust
    /// use shopfront_core::money::Money;
    /// use shopfront_core::types::DiscountRate;
    ///
    /// let price = Money::from_major(100_000);
    /// let discounted = price.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted, Money::from_major(90_000));
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let discount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money(self.0 - discount as i64)
    }

    /// Plain decimal rendering, no currency symbol: `"1234.50"`.
    ///
    /// The stock table prints the symbol after the amount and the receipt
    /// pads the amount into a column, so both need the bare number.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// `$1234.50`, or `-$5.50` for negatives.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.major().abs(), self.minor_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a line quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(100_000);
        assert_eq!(money.cents(), 10_000_000);
        assert_eq!(money.major(), 100_000);
        assert_eq!(money.minor_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_major(270_000).to_decimal_string(), "270000.00");
        assert_eq!(Money::from_cents(7).to_decimal_string(), "0.07");
        assert_eq!(Money::from_cents(-7).to_decimal_string(), "-0.07");
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // 10.99 at 10% = 1.099 off → 1.10 off → 9.89
        let price = Money::from_cents(1099);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 989);

        // 0.05 at 10% = 0.005 off → 0.01 off
        let price = Money::from_cents(5);
        assert_eq!(price.apply_discount(DiscountRate::from_bps(1000)).cents(), 4);
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let price = Money::from_cents(12_345);
        assert_eq!(price.apply_discount(DiscountRate::zero()), price);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        assert_eq!(acc, a);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }
}
