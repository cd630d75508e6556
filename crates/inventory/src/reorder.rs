//! Reorder eligibility and idempotency.
//!
//! The desk decides whether a reorder request should go out; the service
//! publishes it. Outstanding requests are remembered so that repeated clicks
//! produce one notification, and forgotten once an edit brings the item back
//! to `good`.

use std::collections::HashSet;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use rxstock_core::ItemId;

use crate::classifier::StockTier;

/// What happened to a reorder request.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderOutcome {
    /// Accepted; procurement has been notified.
    Requested,
    /// A request for this item is already outstanding.
    AlreadyRequested,
    /// The item is at or above its minimum stock.
    NotNeeded,
    /// No item with this id.
    UnknownItem,
}

impl ReorderOutcome {
    pub fn is_requested(self) -> bool {
        matches!(self, ReorderOutcome::Requested)
    }
}

#[derive(Debug, Default)]
pub struct ReorderDesk {
    pending: Mutex<HashSet<ItemId>>,
}

impl ReorderDesk {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide a request for `id`, whose current tier is `tier` (`None` when the
    /// item does not exist). Records the request when it is accepted.
    pub fn request(&self, id: ItemId, tier: Option<StockTier>) -> ReorderOutcome {
        let Some(tier) = tier else {
            return ReorderOutcome::UnknownItem;
        };
        if !tier.is_alert() {
            return ReorderOutcome::NotNeeded;
        }

        match self.pending.lock() {
            Ok(mut pending) => {
                if pending.insert(id) {
                    ReorderOutcome::Requested
                } else {
                    ReorderOutcome::AlreadyRequested
                }
            }
            // Without the ledger we cannot dedupe; let the request through.
            Err(_) => ReorderOutcome::Requested,
        }
    }

    /// Forget the outstanding request for `id`. Returns whether one existed.
    pub fn settle(&self, id: &ItemId) -> bool {
        self.pending.lock().map(|mut pending| pending.remove(id)).unwrap_or(false)
    }

    pub fn is_pending(&self, id: &ItemId) -> bool {
        self.pending.lock().map(|pending| pending.contains(id)).unwrap_or(false)
    }

    pub fn pending(&self) -> Vec<ItemId> {
        let mut ids: Vec<_> = match self.pending.lock() {
            Ok(pending) => pending.iter().copied().collect(),
            Err(_) => vec![],
        };
        ids.sort();
        ids
    }
}
