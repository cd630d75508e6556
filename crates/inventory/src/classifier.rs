//! Stock tier classification.
//!
//! One pure rule, evaluated in order (first match wins):
//!
//! 1. `current < critical_percent% of minimum` → [`StockTier::Critical`]
//! 2. `current < minimum` → [`StockTier::Low`]
//! 3. otherwise → [`StockTier::Good`]
//!
//! The ratio is held as an integer percentage and compared as
//! `current * 100 < minimum * percent`, which is exact for whole-unit stock
//! (`0.3 * 10` in binary floating point is `3.0000000000000004`).

use serde::{Deserialize, Serialize};

use rxstock_core::ValueObject;

/// Default critical threshold: 30% of the minimum stock.
pub const DEFAULT_CRITICAL_PERCENT: u32 = 30;

/// Stock status tier, derived from current vs. minimum stock.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockTier {
    Critical,
    Low,
    Good,
}

impl StockTier {
    /// Label shown in the inventory table's status column.
    pub fn badge_label(self) -> &'static str {
        match self {
            StockTier::Critical => "Critical",
            StockTier::Low => "Low Stock",
            StockTier::Good => "In Stock",
        }
    }

    /// `true` for tiers that appear on the alerts screen.
    pub fn is_alert(self) -> bool {
        !matches!(self, StockTier::Good)
    }

    /// Higher is more urgent.
    pub fn severity(self) -> u8 {
        match self {
            StockTier::Critical => 2,
            StockTier::Low => 1,
            StockTier::Good => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockTier::Critical => "critical",
            StockTier::Low => "low",
            StockTier::Good => "good",
        }
    }
}

impl ValueObject for StockTier {}

impl core::fmt::Display for StockTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify stock with the default 30% critical threshold.
///
/// Total over its inputs: `minimum_stock == 0` yields `Good` since neither
/// strict comparison can hold for non-negative stock.
pub fn classify(current_stock: f64, minimum_stock: f64) -> StockTier {
    classify_with_percent(current_stock, minimum_stock, DEFAULT_CRITICAL_PERCENT)
}

/// Classify stock against an explicit critical percentage.
pub fn classify_with_percent(
    current_stock: f64,
    minimum_stock: f64,
    critical_percent: u32,
) -> StockTier {
    if current_stock * 100.0 < minimum_stock * f64::from(critical_percent) {
        StockTier::Critical
    } else if current_stock < minimum_stock {
        StockTier::Low
    } else {
        StockTier::Good
    }
}

/// Current stock as a percentage of the minimum (the alerts progress bar).
///
/// `None` when there is no minimum to compare against.
pub fn stock_level_percent(current_stock: u32, minimum_stock: u32) -> Option<f64> {
    if minimum_stock == 0 {
        return None;
    }
    Some(f64::from(current_stock) / f64::from(minimum_stock) * 100.0)
}
