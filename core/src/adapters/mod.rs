//! Adapters layer - External system implementations.
//!
//! This module contains implementations of the port traits defined in `ports`.
//! Each adapter handles communication with external systems.

pub mod killer;
pub mod scanner;
pub mod store;

// Re-export main types for convenience
pub use killer::SignalKiller;
pub use scanner::LsofSource;
pub use store::JsonFileStore;
