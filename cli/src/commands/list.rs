//! List command - show all registered ports.

use std::process::ExitCode;

use anyhow::Result;
use devport_core::{DevportPaths, Registry};

use super::truncate;

pub async fn run(paths: &DevportPaths, json: bool) -> Result<ExitCode> {
    let records = Registry::open(paths).list().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(ExitCode::SUCCESS);
    }

    if records.is_empty() {
        println!("No ports registered yet.");
        println!("Use \"devport add <port> <project>\" to register a port.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nRegistered Development Ports:\n");
    println!("{:<5} | {:<19} | DESCRIPTION", "PORT", "PROJECT");
    println!("{}-|-{}-|-{}", "-".repeat(5), "-".repeat(19), "-".repeat(17));

    for record in &records {
        println!(
            "{:<5} | {:<19} | {}",
            record.port,
            truncate(&record.project, 19),
            record.description
        );
    }

    println!("\nTotal: {} port(s) registered\n", records.len());
    Ok(ExitCode::SUCCESS)
}
