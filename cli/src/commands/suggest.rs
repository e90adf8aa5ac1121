//! Suggest command - find the next unregistered port.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::domain::validate::parse_port;
use devport_core::{DevportPaths, Registry};

use super::invalid;

pub async fn run(paths: &DevportPaths, start: &str, json: bool) -> Result<ExitCode> {
    let start = match parse_port(start) {
        Ok(p) => p,
        Err(e) => return Ok(invalid(format!("Start port is invalid: {}", e))),
    };

    let suggested = Registry::open(paths).suggest(start).await;

    if json {
        println!("{}", serde_json::json!({ "start": start, "port": suggested }));
        return Ok(ExitCode::SUCCESS);
    }

    match suggested {
        Some(port) => println!("Suggested available port: {}", port),
        None => println!("No available port at or above {}.", start),
    }
    Ok(ExitCode::SUCCESS)
}
