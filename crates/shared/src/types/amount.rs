//! Non-negative monetary amount.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! Amounts are magnitudes only: the direction of a transaction's financial
//! effect is derived from its kind, never stored as a negative amount.
//! Ledgerly operates in a single implicit currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when constructing an `Amount` from an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount must be non-negative, got {0}")]
pub struct AmountError(pub Decimal);

/// A non-negative monetary amount.
///
/// The invariant `value >= 0` is enforced at construction and at
/// deserialization, so downstream computations never have to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError(value));
        }
        Ok(Self(value))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_accepts_zero_and_positive() {
        assert_eq!(Amount::new(dec!(0)).unwrap(), Amount::ZERO);
        assert_eq!(Amount::new(dec!(100.50)).unwrap().value(), dec!(100.50));
    }

    #[test]
    fn test_amount_rejects_negative() {
        let err = Amount::new(dec!(-1)).unwrap_err();
        assert_eq!(err, AmountError(dec!(-1)));
        assert_eq!(err.to_string(), "amount must be non-negative, got -1");
    }

    #[test]
    fn test_amount_negative_zero_is_zero() {
        // Decimal distinguishes -0 from 0; Amount treats both as zero.
        let amount = Amount::new(dec!(-0.0)).unwrap();
        assert!(amount.is_zero());
    }

    #[test]
    fn test_amount_deserialization_enforces_invariant() {
        let ok: Amount = serde_json::from_str("\"12.34\"").unwrap();
        assert_eq!(ok.value(), dec!(12.34));

        let err = serde_json::from_str::<Amount>("\"-12.34\"");
        assert!(err.is_err());
    }
}
