//! Money type for representing prices.
//!
//! Uses a cents-based integer representation to avoid floating-point
//! precision issues. The storefront sells in a single currency, displayed
//! with a plain `$` symbol, so no currency tag is carried.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary value in the storefront's single currency.
///
/// Amounts are stored in cents. Catalog prices written in decimal dollars
/// go through [`Money::from_decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use ghostgum_commerce::money::Money;
    /// let price = Money::from_decimal(42.0);
    /// assert_eq!(price.cents, 4200);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a quantity. Saturates instead of wrapping; cart
    /// operations are total and must not panic on absurd quantities.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents.saturating_mul(factor))
    }

    /// Subtract, saturating at zero.
    pub fn saturating_sub(&self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_sub(other.cents).max(0))
    }

    /// Sum an iterator of Money values, saturating on overflow.
    pub fn sum(iter: impl Iterator<Item = Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(other.cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents.saturating_sub(other.cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.to_decimal())
    }
}
