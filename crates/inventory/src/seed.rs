//! Demo catalogue stocked by the pharmacy portal.

use chrono::NaiveDate;

use rxstock_core::{DomainResult, ItemId};

use crate::item::{InventoryItem, NewInventoryItem};
use crate::price::Price;
use crate::store::InMemoryInventoryStore;

struct SeedRow {
    name: &'static str,
    dosage: &'static str,
    category: &'static str,
    current_stock: u32,
    minimum_stock: u32,
    price_cents: u64,
    daily_usage: f64,
    last_restocked: Option<(i32, u32, u32)>,
}

const CATALOGUE: [SeedRow; 10] = [
    SeedRow {
        name: "Amoxicillin",
        dosage: "500mg",
        category: "Antibiotic",
        current_stock: 15,
        minimum_stock: 50,
        price_cents: 1299,
        daily_usage: 8.0,
        last_restocked: Some((2025, 12, 20)),
    },
    SeedRow {
        name: "Lisinopril",
        dosage: "10mg",
        category: "Blood Pressure",
        current_stock: 120,
        minimum_stock: 75,
        price_cents: 899,
        daily_usage: 0.0,
        last_restocked: None,
    },
    SeedRow {
        name: "Metformin",
        dosage: "850mg",
        category: "Diabetes",
        current_stock: 95,
        minimum_stock: 80,
        price_cents: 1599,
        daily_usage: 0.0,
        last_restocked: None,
    },
    SeedRow {
        name: "Atorvastatin",
        dosage: "20mg",
        category: "Cholesterol",
        current_stock: 78,
        minimum_stock: 60,
        price_cents: 1899,
        daily_usage: 0.0,
        last_restocked: None,
    },
    SeedRow {
        name: "Omeprazole",
        dosage: "40mg",
        category: "Gastric",
        current_stock: 42,
        minimum_stock: 75,
        price_cents: 1199,
        daily_usage: 5.0,
        last_restocked: Some((2026, 1, 5)),
    },
    SeedRow {
        name: "Ibuprofen",
        dosage: "400mg",
        category: "Pain Relief",
        current_stock: 28,
        minimum_stock: 100,
        price_cents: 699,
        daily_usage: 12.0,
        last_restocked: Some((2025, 12, 15)),
    },
    SeedRow {
        name: "Paracetamol",
        dosage: "500mg",
        category: "Pain Relief",
        current_stock: 150,
        minimum_stock: 120,
        price_cents: 499,
        daily_usage: 0.0,
        last_restocked: None,
    },
    SeedRow {
        name: "Cetirizine",
        dosage: "10mg",
        category: "Allergy",
        current_stock: 65,
        minimum_stock: 50,
        price_cents: 999,
        daily_usage: 6.0,
        last_restocked: Some((2026, 1, 10)),
    },
    SeedRow {
        name: "Levothyroxine",
        dosage: "50mcg",
        category: "Thyroid",
        current_stock: 88,
        minimum_stock: 60,
        price_cents: 1399,
        daily_usage: 0.0,
        last_restocked: None,
    },
    SeedRow {
        name: "Amlodipine",
        dosage: "5mg",
        category: "Blood Pressure",
        current_stock: 35,
        minimum_stock: 70,
        price_cents: 1099,
        daily_usage: 4.0,
        last_restocked: Some((2026, 1, 8)),
    },
];

/// The ten demo medicines, each with a fresh id.
pub fn pharmacy_catalogue() -> DomainResult<Vec<InventoryItem>> {
    CATALOGUE
        .iter()
        .map(|row| {
            InventoryItem::create(
                ItemId::new(),
                NewInventoryItem {
                    name: row.name.to_string(),
                    dosage: row.dosage.to_string(),
                    category: row.category.to_string(),
                    current_stock: row.current_stock,
                    minimum_stock: row.minimum_stock,
                    daily_usage: row.daily_usage,
                    unit_price: Price::from_cents(row.price_cents),
                    last_restocked: row
                        .last_restocked
                        .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                },
            )
        })
        .collect()
}

/// An in-memory store preloaded with [`pharmacy_catalogue`].
pub fn seeded_store() -> DomainResult<InMemoryInventoryStore> {
    InMemoryInventoryStore::with_items(pharmacy_catalogue()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::build_alert_feed;
    use crate::store::InventoryStore;

    #[test]
    fn catalogue_has_ten_distinct_items() {
        let items = pharmacy_catalogue().unwrap();
        assert_eq!(items.len(), 10);

        let mut ids: Vec<_> = items.iter().map(|i| i.id_typed()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn catalogue_tiers() {
        let feed = build_alert_feed(&seeded_store().unwrap().list());
        let critical: Vec<_> = feed.critical.iter().map(|a| a.name.as_str()).collect();
        let low: Vec<_> = feed.low.iter().map(|a| a.name.as_str()).collect();

        // Ibuprofen: 28 < 30. Amoxicillin sits exactly on 30% of 50 and is low.
        assert_eq!(critical, vec!["Ibuprofen"]);
        // Amoxicillin 1 day, Amlodipine 8 days, Omeprazole 8 days.
        assert_eq!(low, vec!["Amoxicillin", "Amlodipine", "Omeprazole"]);
        assert_eq!(feed.good.len(), 6);
    }

    #[test]
    fn restock_dates_are_kept() {
        let items = pharmacy_catalogue().unwrap();
        let amoxicillin = items.iter().find(|i| i.name() == "Amoxicillin").unwrap();
        assert_eq!(amoxicillin.last_restocked(), NaiveDate::from_ymd_opt(2025, 12, 20));
    }
}
