//! Stock service: the read views and commands the portal screens call.

use chrono::Utc;
use serde::Serialize;

use rxstock_core::{DomainResult, ItemId};
use rxstock_events::{EventBus, EventEnvelope, Subscription};

use crate::alerts::{AlertFeed, AlertGroups, TierCounts, build_alert_feed_with};
use crate::classifier::StockTier;
use crate::edit::StockEdit;
use crate::events::{InventoryEvent, ReorderRequested, StockEdited};
use crate::item::InventoryItem;
use crate::policy::StockPolicy;
use crate::price::Price;
use crate::publisher::EventPublisher;
use crate::reorder::{ReorderDesk, ReorderOutcome};
use crate::search::filter_by_text;
use crate::store::InventoryStore;

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub id: ItemId,
    pub name: String,
    pub dosage: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub unit_price: Price,
    pub tier: StockTier,
    pub badge: &'static str,
}

impl InventoryRow {
    fn new(item: &InventoryItem, tier: StockTier) -> Self {
        Self {
            id: item.id_typed(),
            name: item.name().to_string(),
            dosage: item.dosage().to_string(),
            category: item.category().to_string(),
            current_stock: item.current_stock(),
            minimum_stock: item.minimum_stock(),
            unit_price: item.unit_price(),
            tier,
            badge: tier.badge_label(),
        }
    }
}

pub struct StockService<S, B>
where
    S: InventoryStore,
    B: EventBus<EventEnvelope<InventoryEvent>>,
{
    store: S,
    policy: StockPolicy,
    publisher: EventPublisher<B>,
    reorders: ReorderDesk,
}

impl<S, B> StockService<S, B>
where
    S: InventoryStore,
    B: EventBus<EventEnvelope<InventoryEvent>>,
{
    pub fn new(store: S, bus: B) -> Self {
        Self::with_policy(store, bus, StockPolicy::default())
    }

    pub fn with_policy(store: S, bus: B, policy: StockPolicy) -> Self {
        Self {
            store,
            policy,
            publisher: EventPublisher::new(bus),
            reorders: ReorderDesk::new(),
        }
    }

    pub fn policy(&self) -> &StockPolicy {
        &self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribe to edit and reorder notifications.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<InventoryEvent>> {
        self.publisher.subscribe()
    }

    pub fn get(&self, id: &ItemId) -> Option<InventoryItem> {
        self.store.get(id)
    }

    pub fn tier_of(&self, item: &InventoryItem) -> StockTier {
        self.policy.tier_of(item)
    }

    /// Inventory table rows matching `query` (blank query lists everything).
    pub fn inventory_table(&self, query: &str) -> Vec<InventoryRow> {
        filter_by_text(&self.store.list(), query)
            .iter()
            .map(|item| InventoryRow::new(item, self.policy.tier_of(item)))
            .collect()
    }

    pub fn alert_feed(&self) -> AlertFeed {
        let mut feed = build_alert_feed_with(&self.store.list(), &self.policy);
        feed.mark_pending(|id| self.reorders.is_pending(id));
        tracing::debug!(
            critical = feed.critical.len(),
            low = feed.low.len(),
            good = feed.good.len(),
            "alert feed built"
        );
        feed
    }

    /// Critical and low groups for the alerts screen.
    pub fn alerts(&self) -> AlertGroups {
        self.alert_feed().into_groups()
    }

    pub fn dashboard_summary(&self) -> TierCounts {
        build_alert_feed_with(&self.store.list(), &self.policy).counts()
    }

    /// Validate and apply a pharmacist edit.
    ///
    /// Invalid input is rejected before the store is touched.
    pub fn edit_item(&self, edit: &StockEdit) -> DomainResult<InventoryRow> {
        let patch = edit.validate().inspect_err(|error| {
            tracing::info!(item_id = %edit.id, %error, "stock edit rejected");
        })?;

        let replaced = self.store.update(&edit.id, &patch)?;
        let previous_tier = self.policy.tier_of(&replaced.previous);
        let tier = self.policy.tier_of(&replaced.current);

        if tier != previous_tier {
            tracing::info!(
                item_id = %edit.id,
                from = %previous_tier,
                to = %tier,
                "stock tier changed"
            );
        }
        if !tier.is_alert() && self.reorders.settle(&edit.id) {
            tracing::info!(item_id = %edit.id, "outstanding reorder settled by restock");
        }

        let current = &replaced.current;
        self.publisher.publish(InventoryEvent::StockEdited(StockEdited {
            item_id: edit.id,
            previous_tier,
            tier,
            current_stock: current.current_stock(),
            minimum_stock: current.minimum_stock(),
            unit_price: current.unit_price(),
            occurred_at: Utc::now(),
        }));

        Ok(InventoryRow::new(current, tier))
    }

    /// Ask procurement to restock `id`.
    ///
    /// Only items below their minimum are eligible; anything else is a no-op.
    pub fn request_reorder(&self, id: ItemId) -> ReorderOutcome {
        let item = self.store.get(&id);
        let tier = item.as_ref().map(|item| self.policy.tier_of(item));
        let outcome = self.reorders.request(id, tier);

        if let (Some(item), Some(tier), ReorderOutcome::Requested) = (&item, tier, outcome) {
            tracing::info!(item_id = %id, name = item.name(), %tier, "reorder requested");
            self.publisher.publish(InventoryEvent::ReorderRequested(ReorderRequested {
                item_id: id,
                name: item.display_name(),
                category: item.category().to_string(),
                tier,
                current_stock: item.current_stock(),
                minimum_stock: item.minimum_stock(),
                days_until_empty: item.days_until_empty(),
                occurred_at: Utc::now(),
            }));
        } else {
            tracing::debug!(item_id = %id, ?outcome, "reorder request ignored");
        }

        outcome
    }

    pub fn pending_reorders(&self) -> Vec<ItemId> {
        self.reorders.pending()
    }
}
