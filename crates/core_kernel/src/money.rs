//! Monetary amounts and rates for bill calculations
//!
//! Bill arithmetic is plain `f64` arithmetic so that discount results match
//! the established outputs bit-for-bit. `Amount` guards the one thing the
//! float type does not: values must be finite and non-negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::CoreError;

/// A validated non-negative, finite monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Creates a validated amount
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the value is NaN, infinite or negative
    pub fn try_new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::validation(format!(
                "amount must be finite, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(CoreError::validation(format!(
                "amount must not be negative, got {value}"
            )));
        }
        Ok(Self(floor_at_zero(value)))
    }

    /// Returns the zero amount
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Returns the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Scales by `units` per hundred: `(amount / 100) * units`
    ///
    /// Evaluated in exactly that order, which is not always bit-identical to
    /// multiplying by `units / 100`.
    pub fn per_hundred(&self, units: f64) -> Amount {
        Amount((self.0 / 100.0) * units)
    }

    /// Subtracts `other`, flooring the result at zero
    pub fn saturating_sub(&self, other: Amount) -> Amount {
        Amount(floor_at_zero(self.0 - other.0))
    }
}

/// Clamps to `+0.0`; `f64::max` can return `-0.0` for a `-0.0` input
fn floor_at_zero(value: f64) -> f64 {
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl TryFrom<f64> for Amount {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> f64 {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    /// Floors at zero; an `Amount` is never negative
    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

/// A percentage rate stored as a fraction (e.g. 0.05 for 5%)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    value: f64,
}

impl Rate {
    /// Creates a rate from a fraction
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the rate as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.value * 100.0
    }

    /// Applies this rate to an amount by direct multiplication
    pub fn apply(&self, amount: Amount) -> Amount {
        Amount(amount.0 * self.value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_creation() {
        let a = Amount::try_new(100.5).unwrap();
        assert_eq!(a.value(), 100.5);
    }

    #[test]
    fn test_amount_rejects_negative() {
        assert!(matches!(Amount::try_new(-0.01), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_amount_rejects_non_finite() {
        assert!(Amount::try_new(f64::NAN).is_err());
        assert!(Amount::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let a = Amount::try_new(-0.0).unwrap();
        assert!(!a.value().is_sign_negative());
    }

    #[test]
    fn test_amount_subtraction_floors_at_zero() {
        let a = Amount::try_new(10.0).unwrap();
        let b = Amount::try_new(25.0).unwrap();
        assert!((a - b).is_zero());
    }

    #[test]
    fn test_per_hundred() {
        let amount = Amount::try_new(200.0).unwrap();
        assert_eq!(amount.per_hundred(5.0).value(), 10.0);
    }

    #[test]
    fn test_rate_application() {
        let rate = Rate::new(0.3);
        let amount = Amount::try_new(50.0).unwrap();
        assert_eq!(rate.apply(amount).value(), 50.0 * 0.3);
    }
}
