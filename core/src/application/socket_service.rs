//! Live socket application service.

use tracing::{debug, error, warn};

use crate::adapters::scanner::parse_lsof_listen;
use crate::adapters::{LsofSource, SignalKiller};
use crate::domain::{ActiveSocketEntry, KillReport};
use crate::error::{Error, Result};
use crate::ports::{ProcessKillerPort, SocketSource};

/// Application service over the OS socket table.
///
/// Uses the `SocketSource` trait to query sockets and `ProcessKillerPort` to
/// terminate owners, so both can be replaced in tests.
pub struct SocketScanner<S: SocketSource, K: ProcessKillerPort> {
    source: S,
    killer: K,
}

impl SocketScanner<LsofSource, SignalKiller> {
    /// Scanner backed by `lsof` and native process signals.
    pub fn system() -> Self {
        Self::new(LsofSource::new(), SignalKiller::new())
    }
}

impl<S: SocketSource, K: ProcessKillerPort> SocketScanner<S, K> {
    /// Create a scanner from a socket source and a process killer.
    pub fn new(source: S, killer: K) -> Self {
        Self { source, killer }
    }

    /// Listening TCP sockets, ascending by port.
    ///
    /// A failure to query the OS is logged and yields an empty list.
    pub async fn list_active(&self) -> Vec<ActiveSocketEntry> {
        match self.source.listening().await {
            Ok(output) => parse_lsof_listen(&output),
            Err(e) => {
                error!(error = %e, "Error listing active ports");
                Vec::new()
            }
        }
    }

    /// Force-terminate every process listening on `port`.
    ///
    /// Fails with [`Error::NotFound`] when nothing is bound. A termination
    /// that fails for one of several owners is logged; the call still
    /// reports every targeted PID.
    pub async fn kill_owner(&self, port: u16) -> Result<KillReport> {
        let pids = self.source.pids_on_port(port).await?;
        if pids.is_empty() {
            return Err(Error::NotFound(port));
        }

        for &pid in &pids {
            match self.killer.kill_force(pid).await {
                Ok(()) => debug!(port = port, pid = pid, "Process killed"),
                Err(e) => warn!(port = port, pid = pid, error = %e, "Failed to kill process"),
            }
        }

        Ok(KillReport { port, pids })
    }
}
