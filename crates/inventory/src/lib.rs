//! Pharmacy stock classification and threshold alerting.
//!
//! Inventory records are classified into `critical / low / good` tiers, given a
//! depletion horizon, and aggregated into an urgency-ordered alert feed for the
//! inventory table, the alerts screen and the dashboard summary. All of the
//! logic is pure; [`StockService`] ties it to a store and an event bus.

pub mod alerts;
pub mod classifier;
pub mod depletion;
pub mod edit;
pub mod events;
pub mod item;
pub mod policy;
pub mod price;
pub mod publisher;
pub mod reorder;
pub mod search;
pub mod seed;
pub mod service;
pub mod store;

pub use alerts::{
    AlertFeed, AlertGroups, StockAlert, TierCounts, build_alert_feed, build_alert_feed_with,
};
pub use classifier::{
    DEFAULT_CRITICAL_PERCENT, StockTier, classify, classify_with_percent, stock_level_percent,
};
pub use depletion::{DaysUntilEmpty, days_until_empty};
pub use edit::{StockEdit, StockPatch};
pub use events::{InventoryEvent, ReorderRequested, StockEdited};
pub use item::{InventoryItem, NewInventoryItem};
pub use policy::{CRITICAL_PERCENT_ENV, StockPolicy};
pub use price::Price;
pub use publisher::EventPublisher;
pub use reorder::{ReorderDesk, ReorderOutcome};
pub use search::filter_by_text;
pub use service::{InventoryRow, StockService};
pub use store::{InMemoryInventoryStore, InventoryStore, ItemReplaced};
