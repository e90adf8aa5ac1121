//! Add command - register a port for a project.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::domain::validate::{parse_port, validate_project};
use devport_core::{DevportPaths, Registry};

use super::{failure, invalid, success};

pub async fn run(paths: &DevportPaths, port: &str, project: &str, description: &str) -> Result<ExitCode> {
    let port = match parse_port(port) {
        Ok(p) => p,
        Err(e) => return Ok(invalid(e)),
    };
    let project = match validate_project(project) {
        Ok(p) => p,
        Err(e) => return Ok(invalid(e)),
    };

    let registry = Registry::open(paths);
    match registry.add(port, project, description).await {
        Ok(record) => {
            success(format!("Port {} registered for \"{}\"", record.port, record.project));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(failure(e)),
    }
}
