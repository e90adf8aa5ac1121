//! Socket table adapter backed by `lsof`.
//!
//! `lsof` ships with macOS and is available on most Linux distributions,
//! so a single implementation covers both.

mod lsof;
mod utils;

use std::io::ErrorKind;
use std::process::{Output, Stdio};

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};
use crate::ports::SocketSource;

pub use lsof::{parse_lsof_listen, parse_pid_list};

/// Name of the listing utility, resolved through `PATH`.
const LSOF: &str = "lsof";

/// Queries the socket table by running `lsof`.
#[derive(Debug, Default)]
pub struct LsofSource;

impl LsofSource {
    /// Create a new lsof-backed source.
    pub fn new() -> Self {
        Self
    }

    async fn run(&self, args: &[&str]) -> Result<String> {
        debug!(args = ?args, "Running lsof");

        let output = Command::new(LSOF)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => Error::Scan("lsof is not installed".to_string()),
                ErrorKind::PermissionDenied => {
                    Error::Scan(format!("Permission denied running lsof: {}", e))
                }
                _ => Error::Scan(format!("Failed to run lsof: {}", e)),
            })?;

        Self::check_status(output)
    }

    /// lsof exits with 1 and prints nothing when no socket matches; that is
    /// an empty result, not a failure, even if stderr carries warnings
    /// (e.g. unreadable overlay or gvfs mounts).
    fn check_status(output: Output) -> Result<String> {
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Scan(format!("Invalid UTF-8 in lsof output: {}", e)))?;

        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !stdout.trim().is_empty() || output.status.code() == Some(1) {
            debug!(status = %output.status, stderr = %stderr.trim(), "lsof reported warnings");
            return Ok(stdout);
        }

        Err(Error::Scan(format!("lsof failed: {}", stderr.trim())))
    }
}

impl SocketSource for LsofSource {
    /// Executes: `lsof -iTCP -sTCP:LISTEN -P -n`
    ///
    /// Flags explained:
    /// - -iTCP: Show only TCP connections
    /// - -sTCP:LISTEN: Show only listening sockets
    /// - -P: Show port numbers (don't resolve to service names)
    /// - -n: Show IP addresses (don't resolve to hostnames)
    async fn listening(&self) -> Result<String> {
        self.run(&["-iTCP", "-sTCP:LISTEN", "-P", "-n"]).await
    }

    /// Executes: `lsof -ti tcp:<port> -sTCP:LISTEN`
    ///
    /// Only the listening owners are returned, not clients connected to
    /// the port.
    async fn pids_on_port(&self, port: u16) -> Result<Vec<u32>> {
        let target = format!("tcp:{}", port);
        let stdout = self.run(&["-t", "-i", target.as_str(), "-sTCP:LISTEN"]).await?;
        Ok(parse_pid_list(&stdout))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        assert_eq!(LsofSource::check_status(output(1, "", "")).unwrap(), "");
    }

    #[test]
    fn test_no_match_with_warning_is_empty() {
        let result = LsofSource::check_status(output(
            1,
            "",
            "lsof: WARNING: can't stat() overlay file system /var/lib/docker/overlay2/abc/merged\n",
        ));
        assert_eq!(result.unwrap(), "");
    }

    #[test]
    fn test_partial_output_is_kept() {
        let result = LsofSource::check_status(output(1, "4411\n", "lsof: WARNING: can't stat()\n"));
        assert_eq!(result.unwrap(), "4411\n");
    }

    #[test]
    fn test_other_failure_is_scan_error() {
        let result = LsofSource::check_status(output(2, "", "lsof: unknown option\n"));
        assert!(matches!(result, Err(Error::Scan(_))));
    }
}
