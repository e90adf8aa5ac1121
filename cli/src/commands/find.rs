//! Find command - show the registration for one port.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use devport_core::domain::validate::parse_lookup_port;
use devport_core::{DevportPaths, Registry};

use super::invalid;

pub async fn run(paths: &DevportPaths, input: &str, json: bool) -> Result<ExitCode> {
    let port = match parse_lookup_port(input) {
        Ok(p) => p,
        Err(e) => return Ok(invalid(e)),
    };

    let record = match port {
        Some(p) => Registry::open(paths).find(p).await,
        None => None,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(ExitCode::SUCCESS);
    }

    match record {
        Some(record) => {
            println!("Port {} is registered:", record.port);
            println!("  Project: {}", record.project);
            if record.has_description() {
                println!("  Description: {}", record.description);
            }
            match record.created_at {
                Some(created) => println!(
                    "  Registered: {}",
                    created.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
                ),
                None => println!("  Registered: unknown"),
            }
        }
        None => println!("Port {} is not registered.", input.trim()),
    }

    Ok(ExitCode::SUCCESS)
}
