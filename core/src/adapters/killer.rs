//! Process termination adapter.
//!
//! Unix sends SIGKILL through `nix`; Windows shells out to `taskkill /F`.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ports::ProcessKillerPort;

/// Force-kills processes with the platform's native mechanism.
#[derive(Debug, Default)]
pub struct SignalKiller;

impl SignalKiller {
    /// Create a new killer.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
impl ProcessKillerPort for SignalKiller {
    async fn kill_force(&self, pid: u32) -> Result<()> {
        use nix::errno::Errno;
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let raw = i32::try_from(pid).map_err(|_| Error::KillFailed {
            pid,
            reason: "PID out of range".to_string(),
        })?;

        debug!(pid = pid, "Force killing process with SIGKILL");

        match kill(Pid::from_raw(raw), Signal::SIGKILL) {
            Ok(()) => Ok(()),
            Err(Errno::ESRCH) => {
                debug!(pid = pid, "Process not found during force kill");
                Err(Error::KillFailed {
                    pid,
                    reason: "No such process".to_string(),
                })
            }
            Err(Errno::EPERM) => {
                warn!(pid = pid, "Permission denied to kill process");
                Err(Error::KillFailed {
                    pid,
                    reason: "Permission denied".to_string(),
                })
            }
            Err(e) => Err(Error::KillFailed {
                pid,
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(not(unix))]
impl ProcessKillerPort for SignalKiller {
    async fn kill_force(&self, pid: u32) -> Result<()> {
        use tokio::process::Command;

        debug!(pid = pid, "Executing taskkill /F");

        let output = Command::new("taskkill")
            .args(["/F", "/PID", &pid.to_string()])
            .output()
            .await?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        warn!(pid = pid, stderr = %stderr.trim(), "taskkill failed");
        Err(Error::KillFailed {
            pid,
            reason: stderr.trim().to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_kill_nonexistent_process() {
        // PIDs near i32::MAX are never allocated on Linux or macOS.
        let result = SignalKiller::new().kill_force(i32::MAX as u32 - 1).await;
        assert!(matches!(result, Err(Error::KillFailed { .. })));
    }

    #[tokio::test]
    async fn test_kill_out_of_range_pid() {
        let result = SignalKiller::new().kill_force(u32::MAX).await;
        assert!(matches!(result, Err(Error::KillFailed { .. })));
    }
}
