//! Process killer port (interface).

use crate::error::Result;

/// Port for killing processes.
///
/// Implementations handle platform-specific signal handling.
pub trait ProcessKillerPort: Send + Sync {
    /// Force-terminate a process (SIGKILL). No graceful shutdown is attempted.
    fn kill_force(&self, pid: u32) -> impl std::future::Future<Output = Result<()>> + Send;
}
