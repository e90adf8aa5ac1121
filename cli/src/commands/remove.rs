//! Remove command - delete a port registration.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::domain::validate::parse_lookup_port;
use devport_core::{DevportPaths, Registry};

use super::{failure, invalid, success};

pub async fn run(paths: &DevportPaths, input: &str) -> Result<ExitCode> {
    let port = match parse_lookup_port(input) {
        Ok(Some(p)) => p,
        Ok(None) => return Ok(failure(format!("Port {} is not registered", input.trim()))),
        Err(e) => return Ok(invalid(e)),
    };

    let registry = Registry::open(paths);
    match registry.remove(port).await {
        Ok(record) => {
            success(format!("Port {} removed (was used by \"{}\")", port, record.project));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(failure(e)),
    }
}
