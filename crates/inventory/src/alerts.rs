//! Alert aggregation: partition items by tier, most urgent first.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rxstock_core::ItemId;

use crate::classifier::StockTier;
use crate::depletion::DaysUntilEmpty;
use crate::item::InventoryItem;
use crate::policy::StockPolicy;

/// One row of the alert feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub item_id: ItemId,
    pub name: String,
    pub dosage: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub daily_usage: f64,
    pub last_restocked: Option<NaiveDate>,
    pub tier: StockTier,
    pub days_until_empty: DaysUntilEmpty,
    pub stock_level_percent: Option<f64>,
    /// Set by the service when a reorder is outstanding for this item.
    pub reorder_pending: bool,
}

impl StockAlert {
    fn from_item(item: &InventoryItem, tier: StockTier) -> Self {
        Self {
            item_id: item.id_typed(),
            name: item.name().to_string(),
            dosage: item.dosage().to_string(),
            category: item.category().to_string(),
            current_stock: item.current_stock(),
            minimum_stock: item.minimum_stock(),
            daily_usage: item.daily_usage(),
            last_restocked: item.last_restocked(),
            tier,
            days_until_empty: item.days_until_empty(),
            stock_level_percent: item.stock_level_percent(),
            reorder_pending: false,
        }
    }

    /// Reorders are only accepted for items below their minimum.
    pub fn reorder_eligible(&self) -> bool {
        self.tier.is_alert()
    }
}

/// Per-tier counts for the dashboard summary cards.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierCounts {
    pub critical: usize,
    pub low: usize,
    pub good: usize,
    pub total: usize,
}

impl TierCounts {
    /// Items shown on the alerts screen (critical + low).
    pub fn alerts(&self) -> usize {
        self.critical + self.low
    }
}

/// The two groups rendered by the alerts screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertGroups {
    pub critical: Vec<StockAlert>,
    pub low: Vec<StockAlert>,
}

/// Items partitioned by tier, each partition ordered by urgency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub critical: Vec<StockAlert>,
    pub low: Vec<StockAlert>,
    pub good: Vec<StockAlert>,
}

impl AlertFeed {
    pub fn counts(&self) -> TierCounts {
        TierCounts {
            critical: self.critical.len(),
            low: self.low.len(),
            good: self.good.len(),
            total: self.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.critical.len() + self.low.len() + self.good.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tier(&self, tier: StockTier) -> &[StockAlert] {
        match tier {
            StockTier::Critical => &self.critical,
            StockTier::Low => &self.low,
            StockTier::Good => &self.good,
        }
    }

    /// Critical alerts, then low ones. `good` items never appear here.
    pub fn alerts(&self) -> impl Iterator<Item = &StockAlert> {
        self.critical.iter().chain(self.low.iter())
    }

    pub fn into_groups(self) -> AlertGroups {
        AlertGroups {
            critical: self.critical,
            low: self.low,
        }
    }

    fn for_each_mut(&mut self, mut f: impl FnMut(&mut StockAlert)) {
        self.critical
            .iter_mut()
            .chain(self.low.iter_mut())
            .chain(self.good.iter_mut())
            .for_each(|alert| f(alert));
    }

    pub(crate) fn mark_pending(&mut self, is_pending: impl Fn(&ItemId) -> bool) {
        self.for_each_mut(|alert| alert.reorder_pending = is_pending(&alert.item_id));
    }
}

/// Build the feed under the default 30% policy.
pub fn build_alert_feed(items: &[InventoryItem]) -> AlertFeed {
    build_alert_feed_with(items, &StockPolicy::default())
}

/// Partition by tier; sort each partition by days until empty, then name.
///
/// The item id is the last tie-breaker so equal names still order stably.
pub fn build_alert_feed_with(items: &[InventoryItem], policy: &StockPolicy) -> AlertFeed {
    let mut feed = AlertFeed::default();

    for item in items {
        let tier = policy.tier_of(item);
        let alert = StockAlert::from_item(item, tier);
        match tier {
            StockTier::Critical => feed.critical.push(alert),
            StockTier::Low => feed.low.push(alert),
            StockTier::Good => feed.good.push(alert),
        }
    }

    for partition in [&mut feed.critical, &mut feed.low, &mut feed.good] {
        partition.sort_by(|a, b| {
            a.days_until_empty
                .cmp(&b.days_until_empty)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
    }

    feed
}
