//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod record;
mod socket;
pub mod validate;

pub(crate) use record::iso_millis;

// Re-export all domain types
pub use record::PortRecord;
pub use socket::{ActiveSocketEntry, KillReport};
