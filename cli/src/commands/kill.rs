//! Kill command - force-kill the processes listening on a port.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::domain::validate::parse_port;
use devport_core::SocketScanner;

use super::{failure, invalid, success};

pub async fn run(port: &str) -> Result<ExitCode> {
    let port = match parse_port(port) {
        Ok(p) => p,
        Err(e) => return Ok(invalid(e)),
    };

    match SocketScanner::system().kill_owner(port).await {
        Ok(report) => {
            success(format!(
                "Killed process(es) on port {}: {}",
                report.port,
                report.pid_list()
            ));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(failure(e)),
    }
}
