use std::collections::HashMap;
use std::sync::Mutex;

use rxstock_core::{EventId, ItemId};
use rxstock_events::{Event, EventBus, EventEnvelope, Subscription};

use crate::events::InventoryEvent;

/// Wraps inventory events in envelopes and publishes them fire-and-forget.
///
/// Sequence numbers are per item, start at 1, and only advance on a
/// successful publish.
#[derive(Debug)]
pub struct EventPublisher<B> {
    bus: B,
    sequences: Mutex<HashMap<ItemId, u64>>,
}

impl<B> EventPublisher<B>
where
    B: EventBus<EventEnvelope<InventoryEvent>>,
{
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            sequences: Mutex::new(HashMap::new()),
        }
    }

    pub fn subscribe(&self) -> Subscription<EventEnvelope<InventoryEvent>> {
        self.bus.subscribe()
    }

    /// Publish `event`. Failures are logged, never returned.
    pub fn publish(&self, event: InventoryEvent) -> bool {
        let item_id = event.item_id();
        let event_type = event.event_type();

        let Ok(mut sequences) = self.sequences.lock() else {
            tracing::warn!(%item_id, event_type, "event sequence lock poisoned; dropping event");
            return false;
        };
        let sequence = sequences.get(&item_id).copied().unwrap_or(0) + 1;

        let envelope = EventEnvelope::new(EventId::new(), item_id, sequence, event);
        let event_id = envelope.event_id();
        match self.bus.publish(envelope) {
            Ok(()) => {
                sequences.insert(item_id, sequence);
                tracing::debug!(%event_id, %item_id, event_type, sequence, "event published");
                true
            }
            Err(error) => {
                tracing::warn!(%event_id, %item_id, event_type, %error, "failed to publish event");
                false
            }
        }
    }
}
