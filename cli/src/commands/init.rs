//! # Kickoff Init Command
//!
//! File: cli/src/commands/init.rs
//!
//! ## Overview
//!
//! Implements `kickoff init <project_name>`: creates a directory named after
//! the project in the current working directory, fills it from the starter
//! kit of the selected `--type`, and installs its runtime and development
//! packages.
//!
//! ## Examples
//!
//! ```bash
//! # React web app (the default type)
//! kickoff init my-app
//!
//! # Node.js project; --type may come before or after the subcommand
//! kickoff init my-lib --type node
//! kickoff -t node init my-lib
//! ```
//!
use crate::core::config;
use crate::core::error::Result;
use crate::scaffold::installer::NpmInstaller;
use crate::scaffold::materializer::Materializer;
use crate::scaffold::orchestrator::{self, ScaffoldOutcome, Scaffolder};
use crate::scaffold::registry::ProjectType;
use anyhow::Context;
use clap::Parser;
use std::env;
use std::path::Path;
use tracing::info;

/// Create a directory with the given name and initialize an empty project.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Name of the project directory (also used as package name and description).
    pub project_name: String,
}

/// # Handle Init Command (`handle_init`)
///
/// The asynchronous handler for `kickoff init <project_name>`:
/// 1. Resolves `--type`. An unsupported type prints its message and returns
///    before configuration is even read, so nothing is created.
/// 2. Loads the configuration (starter kit and package manager).
/// 3. Runs the `Scaffolder` in the current working directory.
/// 4. Prints where the project was created.
///
/// ## Arguments
/// * `args` - The parsed `InitArgs`.
/// * `project_type` - The global `--type` value.
///
/// ## Returns
/// * `Result<()>` - `Ok(())` when the project was created or the type was rejected.
/// * `Err` - Configuration, materialization or installation errors.
pub async fn handle_init(args: InitArgs, project_type: ProjectType) -> Result<()> {
    info!(
        "Creating project '{}' of type '{}'",
        args.project_name, project_type
    );

    if orchestrator::resolve_type(project_type.as_str())?.is_none() {
        info!("Nothing created for type '{}'", project_type);
        return Ok(());
    }

    let cfg = config::load_config().context("Failed to load Kickoff configuration")?;
    let cwd = env::current_dir().context("Failed to get current directory")?;

    let scaffolder = Scaffolder::new(
        Materializer::new(cfg.starters.kit()),
        NpmInstaller::new(&cfg.installer.program),
    );

    match scaffolder
        .create_project(&args.project_name, project_type.as_str(), &cwd)
        .await?
    {
        ScaffoldOutcome::Created(path) => print_location(&path, &cwd),
        ScaffoldOutcome::Rejected(kind) => info!("Nothing created for type '{}'", kind),
    }
    Ok(())
}

/// Prints the project location relative to `cwd` when possible.
fn print_location(project_root: &Path, cwd: &Path) {
    let display_path = pathdiff::diff_paths(project_root, cwd)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| project_root.display().to_string());
    println!("   Location: {}", display_path);
}
