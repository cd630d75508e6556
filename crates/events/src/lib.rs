//! Domain events and the pub/sub plumbing that carries them out of the stock
//! subsystem (reorder requests to procurement, edit notifications to views).

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
