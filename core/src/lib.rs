//! devport Core Library
//!
//! Tracks which local TCP ports belong to which development projects and
//! wraps the OS socket table. Provides functionality to:
//! - Register, look up and remove port reservations (persisted as JSON)
//! - Suggest the next unregistered port
//! - List listening TCP sockets and their owning processes
//! - Force-kill the processes bound to a port
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - macOS and Linux: Uses `lsof` and SIGKILL
//! - Windows: Registry only; killing uses `taskkill`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{ActiveSocketEntry, KillReport, PortRecord};

// Re-export other commonly used types
pub use application::{Registry, SocketScanner, DEFAULT_SUGGEST_START};
pub use config::DevportPaths;
pub use error::{Error, Result};
