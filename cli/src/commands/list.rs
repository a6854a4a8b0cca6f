//! # Kickoff List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! Implements `kickoff list`, a table of every value accepted by `--type`
//! with the starter it copies from and how many packages it installs.
//! Types without a descriptor are shown as not yet supported.
//!
use crate::core::error::Result;
use crate::scaffold::registry::ProjectType;
use clap::Parser;
use tracing::info;

/// List the project types accepted by `--type`.
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// # Handle List Command (`handle_list`)
///
/// Prints one row per `ProjectType` as produced by `type_rows`.
///
/// ## Arguments
/// * `_args` - The parsed `ListArgs` (no options yet).
///
/// ## Returns
/// * `Result<()>` - Always `Ok(())`.
pub async fn handle_list(_args: ListArgs) -> Result<()> {
    info!("Handling list command...");
    println!("Available project types:\n");
    for row in type_rows() {
        println!("  {}", row);
    }
    Ok(())
}

/// Type name, starter and package counts, or "(not yet supported)".
fn type_rows() -> Vec<String> {
    ProjectType::ALL
        .into_iter()
        .map(|project_type| match project_type.descriptor() {
            Some(d) => format!(
                "{:<14} starter: {:<10} packages: {} runtime, {} dev",
                project_type.as_str(),
                d.starter_id,
                d.runtime_packages.len(),
                d.dev_packages.len()
            ),
            None => format!("{:<14} (not yet supported)", project_type.as_str()),
        })
        .collect()
}
