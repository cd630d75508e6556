//! End-to-end tests for the stock service.
//!
//! Seeded store → service → views, edits and reorder notifications on the bus.

use std::sync::Arc;

use rxstock_core::{DomainError, ItemId};
use rxstock_events::{EventEnvelope, InMemoryEventBus};
use rxstock_inventory::seed::seeded_store;
use rxstock_inventory::{
    DaysUntilEmpty, InMemoryInventoryStore, InventoryEvent, InventoryStore, ReorderOutcome,
    StockEdit, StockPolicy, StockService, StockTier,
};

type Bus = Arc<InMemoryEventBus<EventEnvelope<InventoryEvent>>>;

fn setup() -> StockService<Arc<InMemoryInventoryStore>, Bus> {
    let store = Arc::new(seeded_store().unwrap());
    let bus: Bus = Arc::new(InMemoryEventBus::new());
    StockService::new(store, bus)
}

fn id_of(service: &StockService<Arc<InMemoryInventoryStore>, Bus>, name: &str) -> ItemId {
    service
        .store()
        .list()
        .into_iter()
        .find(|item| item.name() == name)
        .map(|item| item.id_typed())
        .unwrap()
}

#[test]
fn dashboard_summary_counts_every_tier() {
    let service = setup();
    let summary = service.dashboard_summary();

    assert_eq!(summary.critical, 1);
    assert_eq!(summary.low, 3);
    assert_eq!(summary.good, 6);
    assert_eq!(summary.total, 10);
}

#[test]
fn inventory_table_filters_and_labels_rows() {
    let service = setup();

    let rows = service.inventory_table("pain");
    let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ibuprofen", "Paracetamol"]);
    assert_eq!(rows[0].badge, "Critical");
    assert_eq!(rows[1].badge, "In Stock");

    assert_eq!(service.inventory_table("").len(), 10);
    assert_eq!(service.inventory_table("AMOX")[0].name, "Amoxicillin");
}

#[test]
fn alerts_screen_groups_exclude_good_items() {
    let service = setup();
    let groups = service.alerts();

    assert_eq!(groups.critical.len(), 1);
    assert_eq!(groups.critical[0].name, "Ibuprofen");
    assert_eq!(groups.critical[0].days_until_empty, DaysUntilEmpty::Days(2));
    assert!(groups.low.iter().all(|a| a.tier == StockTier::Low));
}

#[test]
fn edit_reclassifies_and_publishes() {
    let service = setup();
    let subscription = service.subscribe();
    let metformin = id_of(&service, "Metformin");

    let row = service
        .edit_item(&StockEdit::new(metformin).with_current_stock("30"))
        .unwrap();

    // 30 < 24 is false, 30 < 80 is true.
    assert_eq!(row.tier, StockTier::Low);
    assert_eq!(service.dashboard_summary().low, 4);

    let envelope = subscription.try_recv().unwrap();
    assert_eq!(envelope.item_id(), metformin);
    assert_eq!(envelope.sequence_number(), 1);
    match envelope.payload() {
        InventoryEvent::StockEdited(e) => {
            assert_eq!(e.previous_tier, StockTier::Good);
            assert_eq!(e.tier, StockTier::Low);
            assert!(e.tier_changed());
        }
        other => panic!("Expected StockEdited, got {other:?}"),
    }
}

#[test]
fn invalid_edit_leaves_store_untouched() {
    let service = setup();
    let metformin = id_of(&service, "Metformin");
    let before = service.get(&metformin).unwrap();

    let err = service
        .edit_item(
            &StockEdit::new(metformin)
                .with_current_stock("10")
                .with_unit_price("twelve"),
        )
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(service.get(&metformin).unwrap(), before);
}

#[test]
fn edit_of_unknown_item_is_not_found() {
    let service = setup();
    let err = service
        .edit_item(&StockEdit::new(ItemId::new()).with_current_stock("1"))
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound);
}

#[test]
fn reorder_is_idempotent_and_only_for_alerting_items() {
    let service = setup();
    let subscription = service.subscribe();
    let ibuprofen = id_of(&service, "Ibuprofen");
    let paracetamol = id_of(&service, "Paracetamol");

    assert_eq!(service.request_reorder(ibuprofen), ReorderOutcome::Requested);
    assert_eq!(service.request_reorder(ibuprofen), ReorderOutcome::AlreadyRequested);
    assert_eq!(service.request_reorder(paracetamol), ReorderOutcome::NotNeeded);
    assert_eq!(service.request_reorder(ItemId::new()), ReorderOutcome::UnknownItem);

    let published = subscription.drain();
    assert_eq!(published.len(), 1);
    match published[0].payload() {
        InventoryEvent::ReorderRequested(e) => {
            assert_eq!(e.item_id, ibuprofen);
            assert_eq!(e.name, "Ibuprofen 400mg");
            assert_eq!(e.tier, StockTier::Critical);
        }
        other => panic!("Expected ReorderRequested, got {other:?}"),
    }

    let feed = service.alert_feed();
    assert!(feed.critical[0].reorder_pending);
    assert!(feed.low.iter().all(|a| !a.reorder_pending));
}

#[test]
fn restocking_settles_outstanding_reorder() {
    let service = setup();
    let omeprazole = id_of(&service, "Omeprazole");

    assert!(service.request_reorder(omeprazole).is_requested());
    service
        .edit_item(&StockEdit::new(omeprazole).with_current_stock("200"))
        .unwrap();

    assert!(service.pending_reorders().is_empty());

    // Drop back below minimum: a fresh request goes out again.
    service
        .edit_item(&StockEdit::new(omeprazole).with_current_stock("40"))
        .unwrap();
    assert_eq!(service.request_reorder(omeprazole), ReorderOutcome::Requested);
}

#[test]
fn sequence_numbers_increase_per_item() {
    let service = setup();
    let subscription = service.subscribe();
    let amlodipine = id_of(&service, "Amlodipine");

    service
        .edit_item(&StockEdit::new(amlodipine).with_unit_price("11.49"))
        .unwrap();
    service.request_reorder(amlodipine);

    let envelopes = subscription.drain();
    let sequences: Vec<_> = envelopes.iter().map(|e| e.sequence_number()).collect();
    assert_eq!(sequences, vec![1, 2]);
    assert_ne!(envelopes[0].event_id(), envelopes[1].event_id());
}

#[test]
fn stricter_policy_raises_more_critical_alerts() {
    let store = Arc::new(seeded_store().unwrap());
    let bus: Bus = Arc::new(InMemoryEventBus::new());
    let policy = StockPolicy::new(60).unwrap();
    let service = StockService::with_policy(store, bus, policy);

    // Amoxicillin 15 < 30, Ibuprofen 28 < 60, Omeprazole 42 < 45, Amlodipine 35 < 42.
    let summary = service.dashboard_summary();
    assert_eq!(summary.critical, 4);
    assert_eq!(summary.low, 0);
}
