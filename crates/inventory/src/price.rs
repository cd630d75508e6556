use serde::{Deserialize, Serialize};

use rxstock_core::{DomainError, DomainResult, ValueObject};

/// Unit price in the smallest currency unit (cents, USD).
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Parse user input such as `"12.99"` (rounded to the nearest cent).
    pub fn parse_decimal(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim().trim_start_matches('$');
        let value: f64 = trimmed
            .parse()
            .map_err(|_| DomainError::validation(format!("unit_price: '{raw}' is not a number")))?;

        if !value.is_finite() {
            return Err(DomainError::validation("unit_price: must be a finite number"));
        }
        if value < 0.0 {
            return Err(DomainError::validation("unit_price: must not be negative"));
        }

        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::validation("unit_price: too large"));
        }
        Ok(Self(cents as u64))
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_amounts_into_cents() {
        assert_eq!(Price::parse_decimal("12.99").unwrap(), Price::from_cents(1299));
        assert_eq!(Price::parse_decimal(" $4.5 ").unwrap(), Price::from_cents(450));
        assert_eq!(Price::parse_decimal("0").unwrap(), Price::from_cents(0));
    }

    #[test]
    fn rejects_negative_and_non_numeric_input() {
        assert!(matches!(Price::parse_decimal("-1"), Err(DomainError::Validation(_))));
        assert!(matches!(Price::parse_decimal("abc"), Err(DomainError::Validation(_))));
        assert!(matches!(Price::parse_decimal("NaN"), Err(DomainError::Validation(_))));
        assert!(matches!(Price::parse_decimal("inf"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn displays_as_currency() {
        assert_eq!(Price::from_cents(699).to_string(), "$6.99");
        assert_eq!(Price::from_cents(1805).to_string(), "$18.05");
    }
}
