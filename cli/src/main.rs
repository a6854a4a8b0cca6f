//! # Kickoff Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Kickoff CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//! - Mapping failures onto the process exit code
//!
//! ## Examples
//!
//! ```bash
//! kickoff init my-app                 # React web project
//! kickoff init my-lib --type node     # Node.js project
//! kickoff list                        # Accepted project types
//! kickoff -vv init my-app             # With debug logging
//! ```
//!
//! Exit codes: `0` on success (including an unsupported `--type`, which only
//! prints a message), the package manager's own exit code when an install
//! fails, and `1` for any other error.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (init, list)
mod common; // Shared utilities (fs, process)
mod core; // Core infrastructure (config, errors)
mod scaffold; // Registry, materializer, installer, orchestrator

use crate::core::error::KickoffError;
use crate::scaffold::registry::ProjectType;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "kickoff",
    about = "Kickoff: scaffold JavaScript projects from a bundled starter kit",
    override_usage = "kickoff init <project_name> [options]",
    arg_required_else_help = true,
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Create a project of the given type.
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        default_value_t = ProjectType::React,
        global = true
    )]
    project_type: ProjectType,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(clap::Subcommand, Debug)]
enum Commands {
    Init(commands::init::InitArgs),
    List(commands::list::ListArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Init(args) => commands::init::handle_init(args, cli.project_type).await,
        Commands::List(args) => commands::list::handle_list(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        if let Some(KickoffError::InstallFailure { code, .. }) = e.downcast_ref::<KickoffError>() {
            println!("{}", e);
            std::process::exit(code.filter(|c| *c != 0).unwrap_or(1));
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
