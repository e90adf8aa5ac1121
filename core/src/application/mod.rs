//! Application layer - Use case services.
//!
//! Services are thin orchestrators that:
//! - Accept domain types as inputs
//! - Use ports (traits) for external dependencies
//! - Return domain types as outputs

mod registry;
mod socket_service;

pub use registry::{Registry, DEFAULT_SUGGEST_START};
pub use socket_service::SocketScanner;
