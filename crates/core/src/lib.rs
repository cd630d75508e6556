//! `rxstock-core`: domain foundation building blocks.
//!
//! Pure domain primitives shared by the stock crates (no IO, no storage).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EventId, ItemId};
pub use value_object::ValueObject;
