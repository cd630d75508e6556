use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rxstock_core::ItemId;
use rxstock_events::Event;

use crate::classifier::StockTier;
use crate::depletion::DaysUntilEmpty;
use crate::price::Price;

/// Event: StockEdited. A pharmacist edit was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEdited {
    pub item_id: ItemId,
    pub previous_tier: StockTier,
    pub tier: StockTier,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub unit_price: Price,
    pub occurred_at: DateTime<Utc>,
}

impl StockEdited {
    pub fn tier_changed(&self) -> bool {
        self.previous_tier != self.tier
    }
}

/// Event: ReorderRequested. Addressed to procurement; this subsystem never
/// places the order itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequested {
    pub item_id: ItemId,
    pub name: String,
    pub category: String,
    pub tier: StockTier,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub days_until_empty: DaysUntilEmpty,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    StockEdited(StockEdited),
    ReorderRequested(ReorderRequested),
}

impl InventoryEvent {
    pub fn item_id(&self) -> ItemId {
        match self {
            InventoryEvent::StockEdited(e) => e.item_id,
            InventoryEvent::ReorderRequested(e) => e.item_id,
        }
    }
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::StockEdited(_) => "inventory.item.stock_edited",
            InventoryEvent::ReorderRequested(_) => "inventory.reorder.requested",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::StockEdited(e) => e.occurred_at,
            InventoryEvent::ReorderRequested(e) => e.occurred_at,
        }
    }
}
