//! Money type backed by exact decimal arithmetic.

use core::fmt;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Money`] amount.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The input string is empty.
    #[error("amount cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("amount is not a valid decimal number")]
    InvalidNumber,
    /// The amount is negative.
    #[error("amount cannot be negative")]
    Negative,
}

/// A non-negative money amount.
///
/// Backed by [`Decimal`] so catalog prices and order totals stay exact.
/// Zero is allowed; negative amounts are rejected at parse time.
/// Displays with two decimal places.
///
/// ## Examples
///
/// ```
/// use lunchbox_core::Money;
///
/// let price: Money = "3.50".parse().unwrap();
/// assert_eq!(price.to_string(), "3.50");
/// assert_eq!(price.line_total(3).to_string(), "10.50");
///
/// assert!(Money::parse("").is_err());
/// assert!(Money::parse("a lot").is_err());
/// assert!(Money::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parse a `Money` amount from a string.
    ///
    /// The input is trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty (after trimming)
    /// - Is not a decimal number
    /// - Is negative
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MoneyError::Empty);
        }

        let amount: Decimal = s.parse().map_err(|_| MoneyError::InvalidNumber)?;

        if amount.is_sign_negative() {
            return Err(MoneyError::Negative);
        }

        Ok(Self(amount))
    }

    /// Wrap a decimal value without validation.
    #[must_use]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Total for `quantity` units at this unit price.
    #[must_use]
    pub fn line_total(&self, quantity: i32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::str::FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

// SQLx support (with postgres feature): stored as NUMERIC
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Money {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Money {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are constrained non-negative
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Money {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Decimal as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amounts() {
        assert!(Money::parse("3.50").is_ok());
        assert!(Money::parse("0").is_ok());
        assert!(Money::parse("0.00").is_ok());
        assert!(Money::parse("12").is_ok());
        assert!(Money::parse(" 4.25 ").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Money::parse(""), Err(MoneyError::Empty)));
        assert!(matches!(Money::parse("   "), Err(MoneyError::Empty)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Money::parse("free"),
            Err(MoneyError::InvalidNumber)
        ));
        assert!(matches!(
            Money::parse("3..50"),
            Err(MoneyError::InvalidNumber)
        ));
        assert!(matches!(
            Money::parse("3.50 eur"),
            Err(MoneyError::InvalidNumber)
        ));
    }

    #[test]
    fn test_parse_negative() {
        assert!(matches!(Money::parse("-1"), Err(MoneyError::Negative)));
        assert!(matches!(Money::parse("-0.01"), Err(MoneyError::Negative)));
    }

    #[test]
    fn test_display_pads_to_two_decimals() {
        assert_eq!(Money::parse("3.5").unwrap().to_string(), "3.50");
        assert_eq!(Money::parse("3").unwrap().to_string(), "3.00");
        assert_eq!(Money::parse("3.25").unwrap().to_string(), "3.25");
    }

    #[test]
    fn test_line_total() {
        let price = Money::parse("3.50").unwrap();
        assert_eq!(price.line_total(1), price);
        assert_eq!(price.line_total(3).to_string(), "10.50");
    }

    #[test]
    fn test_add() {
        let a = Money::parse("3.50").unwrap();
        let b = Money::parse("1.25").unwrap();
        assert_eq!((a + b).to_string(), "4.75");

        let mut sum = Money::ZERO;
        sum += a;
        sum += b;
        assert_eq!(sum.to_string(), "4.75");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::parse("7.0").unwrap(), Money::parse("7.00").unwrap());
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Money::parse("3.50").unwrap();
        let json = serde_json::to_string(&price).unwrap();

        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_from_str() {
        let price: Money = "2.75".parse().unwrap();
        assert_eq!(price.to_string(), "2.75");
    }
}
