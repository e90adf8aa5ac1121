//! devport CLI - Manage development server ports
//!
//! A command-line tool for registering which project owns which port,
//! inspecting listening sockets, and killing processes on a port.

mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use devport_core::{DevportPaths, DEFAULT_SUGGEST_START};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "devport")]
#[command(author, version, about = "CLI tool for managing development server ports")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a port for a project
    Add {
        /// Port number (1-65535)
        #[arg(allow_negative_numbers = true)]
        port: String,
        /// Project name
        project: String,
        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove a port registration
    #[command(alias = "rm")]
    Remove {
        /// Port number
        #[arg(allow_negative_numbers = true)]
        port: String,
    },

    /// List all registered ports
    #[command(alias = "ls")]
    List,

    /// Find information about a specific port
    Find {
        /// Port number
        #[arg(allow_negative_numbers = true)]
        port: String,
    },

    /// Suggest an available port
    Suggest {
        /// Starting port number
        #[arg(short, long, default_value_t = DEFAULT_SUGGEST_START.to_string())]
        start: String,
    },

    /// Clear all port registrations
    Clear,

    /// List processes listening on TCP ports
    #[command(alias = "ps")]
    Active,

    /// Kill the process listening on a port
    Kill {
        /// Port number
        #[arg(allow_negative_numbers = true)]
        port: String,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let paths = DevportPaths::new()?;

    let code = match command {
        Commands::Add {
            port,
            project,
            description,
        } => commands::add::run(&paths, &port, &project, &description).await?,
        Commands::Remove { port } => commands::remove::run(&paths, &port).await?,
        Commands::List => commands::list::run(&paths, cli.json).await?,
        Commands::Find { port } => commands::find::run(&paths, &port, cli.json).await?,
        Commands::Suggest { start } => commands::suggest::run(&paths, &start, cli.json).await?,
        Commands::Clear => commands::clear::run(&paths).await?,
        Commands::Active => commands::active::run(cli.json).await?,
        Commands::Kill { port } => commands::kill::run(&port).await?,
    };

    Ok(code)
}
