//! Money type for representing monetary values.
//!
//! Amounts are stored as cents to avoid the floating-point precision issues
//! that plague monetary calculations. The boutique trades in US dollars only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary value in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub fn new(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use boutique_commerce::money::Money;
    /// let price = Money::from_decimal(20.00);
    /// assert_eq!(price.cents, 2000);
    /// ```
    pub fn from_decimal(dollars: f64) -> Self {
        Self::new((dollars * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$20.00").
    pub fn display(&self) -> String {
        if self.cents < 0 {
            format!("-${:.2}", -self.to_decimal())
        } else {
            format!("${:.2}", self.to_decimal())
        }
    }

    /// Checked addition.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        self.cents.checked_add(other.cents).map(Money::new)
    }

    /// Checked subtraction.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        self.cents.checked_sub(other.cents).map(Money::new)
    }

    /// Checked multiplication by a count.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.cents.checked_mul(factor).map(Money::new)
    }

    /// Checked sum of an iterator of Money values.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.cents + other.cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.cents - other.cents)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(2000);
        assert_eq!(m.cents, 2000);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(20.00).cents, 2000);
        assert_eq!(Money::from_decimal(5.00).cents, 500);
        assert_eq!(Money::from_decimal(9.99).cents, 999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(1500);
        assert!((m.to_decimal() - 15.00).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(2000).display(), "$20.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-250).display(), "-$2.50");
    }

    #[test]
    fn test_money_addition() {
        let total = Money::new(2000) + Money::new(500);
        assert_eq!(total.cents, 2500);
    }

    #[test]
    fn test_money_try_multiply_overflow() {
        let m = Money::new(i64::MAX);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_money_try_sum() {
        let values = [Money::new(100), Money::new(250), Money::new(50)];
        let sum = Money::try_sum(values.iter()).unwrap();
        assert_eq!(sum.cents, 400);
    }
}
