use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rxstock_core::{DomainError, DomainResult, Entity, ItemId};

use crate::classifier::{StockTier, classify, stock_level_percent};
use crate::depletion::{DaysUntilEmpty, days_until_empty};
use crate::edit::StockPatch;
use crate::price::Price;

/// Input for creating an inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInventoryItem {
    pub name: String,
    pub dosage: String,
    pub category: String,
    pub current_stock: u32,
    pub minimum_stock: u32,
    pub daily_usage: f64,
    pub unit_price: Price,
    pub last_restocked: Option<NaiveDate>,
}

/// A medicine stocked by the pharmacy.
///
/// There is no stored status: the tier is computed from `current_stock` and
/// `minimum_stock` on every read, so it can never drift from the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    dosage: String,
    category: String,
    current_stock: u32,
    minimum_stock: u32,
    daily_usage: f64,
    unit_price: Price,
    last_restocked: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn create(id: ItemId, new: NewInventoryItem) -> DomainResult<Self> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if new.minimum_stock == 0 {
            return Err(DomainError::validation("minimum_stock must be greater than zero"));
        }
        if !(new.daily_usage.is_finite() && new.daily_usage >= 0.0) {
            return Err(DomainError::validation(
                "daily_usage must be a finite, non-negative number",
            ));
        }

        Ok(Self {
            id,
            name: new.name.trim().to_string(),
            dosage: new.dosage.trim().to_string(),
            category: new.category.trim().to_string(),
            current_stock: new.current_stock,
            minimum_stock: new.minimum_stock,
            daily_usage: new.daily_usage,
            unit_price: new.unit_price,
            last_restocked: new.last_restocked,
        })
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dosage(&self) -> &str {
        &self.dosage
    }

    /// Name and dosage as shown on alert cards ("Amoxicillin 500mg").
    pub fn display_name(&self) -> String {
        if self.dosage.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.name, self.dosage)
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn current_stock(&self) -> u32 {
        self.current_stock
    }

    pub fn minimum_stock(&self) -> u32 {
        self.minimum_stock
    }

    pub fn daily_usage(&self) -> f64 {
        self.daily_usage
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    pub fn last_restocked(&self) -> Option<NaiveDate> {
        self.last_restocked
    }

    /// Tier under the default 30% policy.
    pub fn tier(&self) -> StockTier {
        classify(f64::from(self.current_stock), f64::from(self.minimum_stock))
    }

    pub fn days_until_empty(&self) -> DaysUntilEmpty {
        days_until_empty(self.current_stock, self.daily_usage)
    }

    pub fn stock_level_percent(&self) -> Option<f64> {
        stock_level_percent(self.current_stock, self.minimum_stock)
    }

    /// Build the replacement record for an edit. `self` is left untouched.
    pub fn with_patch(&self, patch: &StockPatch) -> Self {
        let mut next = self.clone();
        if let Some(current) = patch.current_stock {
            next.current_stock = current;
        }
        if let Some(minimum) = patch.minimum_stock {
            next.minimum_stock = minimum;
        }
        if let Some(price) = patch.unit_price {
            next.unit_price = price;
        }
        next
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
