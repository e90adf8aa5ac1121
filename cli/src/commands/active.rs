//! Active command - show processes listening on TCP ports.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::SocketScanner;

use super::truncate;

pub async fn run(json: bool) -> Result<ExitCode> {
    let entries = SocketScanner::system().list_active().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    if entries.is_empty() {
        println!("No listening ports found.");
        return Ok(ExitCode::SUCCESS);
    }

    // Table header
    println!(
        "{:<6} {:<8} {:<20} {:<15} COMMAND",
        "PORT", "PID", "PROCESS", "ADDRESS"
    );
    println!("{}", "-".repeat(80));

    for entry in &entries {
        println!(
            "{:<6} {:<8} {:<20} {:<15} {}",
            entry.port,
            entry.pid,
            truncate(&entry.process_name, 20),
            truncate(&entry.address, 15),
            truncate(&entry.command, 30)
        );
    }

    println!("\nTotal: {} ports", entries.len());
    Ok(ExitCode::SUCCESS)
}
