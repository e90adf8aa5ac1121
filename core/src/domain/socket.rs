//! Live socket observations.

use serde::{Deserialize, Serialize};

/// A process listening on a TCP port at the time of a scan.
///
/// Entries are snapshots; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSocketEntry {
    /// The listening port.
    pub port: u16,
    /// Process ID of the owner.
    pub pid: u32,
    /// Short process name as reported by the OS (e.g. "node").
    pub process_name: String,
    /// Raw socket descriptor reported by the OS (e.g. "TCP *:3000 (LISTEN)").
    pub command: String,
    /// Address the socket is bound to (e.g. "*", "127.0.0.1", "[::1]").
    pub address: String,
}

impl ActiveSocketEntry {
    pub fn new(
        port: u16,
        pid: u32,
        process_name: impl Into<String>,
        command: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            port,
            pid,
            process_name: process_name.into(),
            command: command.into(),
            address: address.into(),
        }
    }
}

impl std::fmt::Display for ActiveSocketEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} (PID: {}, Process: {})",
            self.address, self.port, self.pid, self.process_name
        )
    }
}

/// Outcome of terminating the owners of a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillReport {
    /// The port whose owners were targeted.
    pub port: u16,
    /// Every process ID a termination was issued for.
    pub pids: Vec<u32>,
}

impl KillReport {
    /// Comma-separated PID list for display.
    pub fn pid_list(&self) -> String {
        self.pids
            .iter()
            .map(|pid| pid.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
