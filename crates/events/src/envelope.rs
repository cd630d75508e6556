use serde::{Deserialize, Serialize};

use rxstock_core::{EventId, ItemId};

/// Envelope for an event published about one inventory item.
///
/// - `sequence_number` increases by one per published event for the same item,
///   starting at 1, so consumers can drop duplicates.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: EventId,
    item_id: ItemId,

    /// Monotonically increasing position in the item's stream.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: EventId, item_id: ItemId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            item_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
