//! Depletion horizon: how many whole days the current stock lasts.

use serde::{Deserialize, Serialize};

/// Estimated days until an item runs out.
///
/// Ordered by urgency: every `Days(n)` sorts before `Never`, and fewer days sort
/// first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaysUntilEmpty {
    Days(u64),
    /// No usage recorded; the item is not depleting.
    Never,
}

impl DaysUntilEmpty {
    pub fn days(self) -> Option<u64> {
        match self {
            DaysUntilEmpty::Days(d) => Some(d),
            DaysUntilEmpty::Never => None,
        }
    }
}

impl core::fmt::Display for DaysUntilEmpty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DaysUntilEmpty::Days(1) => f.write_str("1 day"),
            DaysUntilEmpty::Days(d) => write!(f, "{d} days"),
            DaysUntilEmpty::Never => f.write_str("no usage"),
        }
    }
}

/// `floor(current_stock / daily_usage)`, or `Never` when usage is not positive.
///
/// Not authoritative for classification; used for ordering and display.
pub fn days_until_empty(current_stock: u32, daily_usage: f64) -> DaysUntilEmpty {
    // `!(x > 0)` also routes NaN to `Never`.
    if !(daily_usage > 0.0) {
        return DaysUntilEmpty::Never;
    }

    let days = (f64::from(current_stock) / daily_usage).floor().max(0.0);
    // Float-to-int casts saturate, so a vanishing usage rate lands on u64::MAX.
    DaysUntilEmpty::Days(days as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_or_negative_usage_never_depletes() {
        assert_eq!(days_until_empty(10, 0.0), DaysUntilEmpty::Never);
        assert_eq!(days_until_empty(10, -2.0), DaysUntilEmpty::Never);
        assert_eq!(days_until_empty(10, f64::NAN), DaysUntilEmpty::Never);
    }

    #[test]
    fn documented_values() {
        assert_eq!(days_until_empty(0, 4.0), DaysUntilEmpty::Days(0));
        assert_eq!(days_until_empty(10, 3.0), DaysUntilEmpty::Days(3));
        assert_eq!(days_until_empty(15, 8.0), DaysUntilEmpty::Days(1));
        assert_eq!(days_until_empty(42, 5.0), DaysUntilEmpty::Days(8));
    }

    #[test]
    fn fractional_usage() {
        assert_eq!(days_until_empty(10, 0.5), DaysUntilEmpty::Days(20));
    }

    #[test]
    fn ordering_puts_urgent_first_and_never_last() {
        let mut horizons = vec![
            DaysUntilEmpty::Never,
            DaysUntilEmpty::Days(8),
            DaysUntilEmpty::Days(2),
        ];
        horizons.sort();
        assert_eq!(
            horizons,
            vec![DaysUntilEmpty::Days(2), DaysUntilEmpty::Days(8), DaysUntilEmpty::Never]
        );
    }

    #[test]
    fn display() {
        assert_eq!(DaysUntilEmpty::Days(1).to_string(), "1 day");
        assert_eq!(DaysUntilEmpty::Days(9).to_string(), "9 days");
        assert_eq!(DaysUntilEmpty::Never.to_string(), "no usage");
    }

    proptest! {
        /// Property: the horizon never overshoots the stock on hand.
        #[test]
        fn horizon_never_exceeds_stock(stock in 0u32..100_000, usage in 0.01f64..1_000.0) {
            let days = days_until_empty(stock, usage).days().unwrap();
            prop_assert!(days as f64 * usage <= f64::from(stock) + 1e-6);
        }
    }
}
