//! Clear command - remove every registration.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::{DevportPaths, Registry};

use super::success;

/// A failed clear is reported but does not change the exit code.
pub async fn run(paths: &DevportPaths) -> Result<ExitCode> {
    match Registry::open(paths).clear_all().await {
        Ok(()) => success("All ports cleared"),
        Err(e) => eprintln!("✗ Failed to clear ports: {}", e),
    }
    Ok(ExitCode::SUCCESS)
}
