//! Money value object.
//!
//! Portfolio and position messages carry amounts as fixed-point units plus
//! nanos; the gRPC layer converts them into [`Money`] so callers work with
//! `Decimal` instead.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount in a specific currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// ISO currency code in lower case, as sent by the API (e.g. `rub`).
    pub currency: String,
    /// Decimal amount.
    pub amount: Decimal,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub fn new(currency: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(currency, Decimal::ZERO)
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn display_amount_then_currency() {
        let money = Money::new("rub", Decimal::from_str("1234.50").unwrap());
        assert_eq!(money.to_string(), "1234.50 rub");
    }

    #[test]
    fn zero_is_zero() {
        assert!(Money::zero("usd").is_zero());
        assert!(!Money::new("usd", Decimal::ONE).is_zero());
    }

    #[test]
    fn trailing_zeroes_compare_equal() {
        let a = Money::new("rub", Decimal::from_str("10.50").unwrap());
        let b = Money::new("rub", Decimal::from_str("10.5").unwrap());
        assert_eq!(a, b);
    }
}
