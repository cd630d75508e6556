//! Inventory repository.

use std::sync::{Arc, RwLock};

use rxstock_core::{DomainError, DomainResult, Entity, ItemId};

use crate::edit::StockPatch;
use crate::item::InventoryItem;

/// Result of an atomic replace: the record before and after the edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReplaced {
    pub previous: InventoryItem,
    pub current: InventoryItem,
}

/// Owner of the inventory collection.
///
/// `update` is an atomic replace: the new record is built in full and swapped
/// in under one write lock, so readers see either the old or the new item.
pub trait InventoryStore: Send + Sync {
    fn get(&self, id: &ItemId) -> Option<InventoryItem>;
    /// All items, in insertion order.
    fn list(&self) -> Vec<InventoryItem>;
    fn insert(&self, item: InventoryItem) -> DomainResult<()>;
    fn update(&self, id: &ItemId, patch: &StockPatch) -> DomainResult<ItemReplaced>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn get(&self, id: &ItemId) -> Option<InventoryItem> {
        (**self).get(id)
    }

    fn list(&self) -> Vec<InventoryItem> {
        (**self).list()
    }

    fn insert(&self, item: InventoryItem) -> DomainResult<()> {
        (**self).insert(item)
    }

    fn update(&self, id: &ItemId, patch: &StockPatch) -> DomainResult<ItemReplaced> {
        (**self).update(id, patch)
    }
}

/// In-memory store for tests/dev and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Vec<InventoryItem>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = InventoryItem>) -> DomainResult<Self> {
        let store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }
}

fn poisoned() -> DomainError {
    DomainError::invariant("inventory store lock poisoned")
}

impl InventoryStore for InMemoryInventoryStore {
    fn get(&self, id: &ItemId) -> Option<InventoryItem> {
        let items = self.inner.read().ok()?;
        items.iter().find(|item| item.id() == id).cloned()
    }

    fn list(&self) -> Vec<InventoryItem> {
        match self.inner.read() {
            Ok(items) => items.clone(),
            Err(_) => vec![],
        }
    }

    fn insert(&self, item: InventoryItem) -> DomainResult<()> {
        let mut items = self.inner.write().map_err(|_| poisoned())?;
        if items.iter().any(|existing| existing.id() == item.id()) {
            return Err(DomainError::conflict(format!("item {} already exists", item.id())));
        }
        items.push(item);
        Ok(())
    }

    fn update(&self, id: &ItemId, patch: &StockPatch) -> DomainResult<ItemReplaced> {
        let mut items = self.inner.write().map_err(|_| poisoned())?;
        let slot = items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(DomainError::not_found)?;

        let current = slot.with_patch(patch);
        let previous = std::mem::replace(slot, current.clone());
        Ok(ItemReplaced { previous, current })
    }
}
