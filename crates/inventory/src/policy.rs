//! Stock policy: which critical percentage applies to an item.
//!
//! The default is [`DEFAULT_CRITICAL_PERCENT`]. Deployments may change it (the
//! `rxstock` binary reads [`CRITICAL_PERCENT_ENV`]) and may override it per category.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rxstock_core::{DomainError, DomainResult};

use crate::classifier::{DEFAULT_CRITICAL_PERCENT, StockTier, classify_with_percent};
use crate::item::InventoryItem;

/// Environment variable holding the default critical percentage.
pub const CRITICAL_PERCENT_ENV: &str = "RXSTOCK_CRITICAL_PERCENT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPolicy {
    critical_percent: u32,
    /// Keyed by lowercased category name.
    category_overrides: BTreeMap<String, u32>,
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self {
            critical_percent: DEFAULT_CRITICAL_PERCENT,
            category_overrides: BTreeMap::new(),
        }
    }
}

impl StockPolicy {
    pub fn new(critical_percent: u32) -> DomainResult<Self> {
        validate_percent(critical_percent)?;
        Ok(Self {
            critical_percent,
            category_overrides: BTreeMap::new(),
        })
    }

    pub fn with_category_override(
        mut self,
        category: &str,
        critical_percent: u32,
    ) -> DomainResult<Self> {
        validate_percent(critical_percent)?;
        let key = category.trim().to_lowercase();
        if key.is_empty() {
            return Err(DomainError::validation("category override needs a category name"));
        }
        self.category_overrides.insert(key, critical_percent);
        Ok(self)
    }

    pub fn critical_percent(&self) -> u32 {
        self.critical_percent
    }

    /// Critical percentage for a category (case-insensitive lookup).
    pub fn critical_percent_for(&self, category: &str) -> u32 {
        self.category_overrides
            .get(&category.trim().to_lowercase())
            .copied()
            .unwrap_or(self.critical_percent)
    }

    pub fn classify(&self, category: &str, current_stock: f64, minimum_stock: f64) -> StockTier {
        classify_with_percent(current_stock, minimum_stock, self.critical_percent_for(category))
    }

    /// Tier of an item under this policy.
    pub fn tier_of(&self, item: &InventoryItem) -> StockTier {
        self.classify(
            item.category(),
            f64::from(item.current_stock()),
            f64::from(item.minimum_stock()),
        )
    }
}

fn validate_percent(percent: u32) -> DomainResult<()> {
    if percent == 0 || percent > 100 {
        return Err(DomainError::validation(format!(
            "critical percent must be within 1..=100 (got {percent})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_uses_thirty_percent() {
        let policy = StockPolicy::default();
        assert_eq!(policy.critical_percent(), 30);
        assert_eq!(policy.classify("Antibiotic", 14.0, 50.0), StockTier::Critical);
        assert_eq!(policy.classify("Antibiotic", 15.0, 50.0), StockTier::Low);
    }

    #[test]
    fn category_overrides_are_case_insensitive() {
        let policy = StockPolicy::default()
            .with_category_override("Antibiotic", 50)
            .unwrap();
        assert_eq!(policy.critical_percent_for("antibiotic"), 50);
        assert_eq!(policy.critical_percent_for("Pain Relief"), 30);
        assert_eq!(policy.classify("ANTIBIOTIC", 20.0, 50.0), StockTier::Critical);
        assert_eq!(policy.classify("Gastric", 20.0, 50.0), StockTier::Low);
    }

    #[test]
    fn out_of_range_percent_is_rejected() {
        assert!(matches!(StockPolicy::new(0), Err(DomainError::Validation(_))));
        assert!(matches!(StockPolicy::new(101), Err(DomainError::Validation(_))));
        assert!(StockPolicy::default().with_category_override("  ", 20).is_err());
    }
}
