//! # Kickoff Package Installer
//!
//! File: cli/src/scaffold/installer.rs
//!
//! ## Overview
//!
//! Installs one group of packages by running the external package manager:
//!
//! ```text
//! npm install --save     react react-dom ...   # SaveMode::Runtime
//! npm install --save-dev eslint mocha ...      # SaveMode::Dev
//! ```
//!
//! ## Architecture
//!
//! - `PackageInstaller` is the seam the orchestrator depends on. Tests drive
//!   the orchestrator with a recording implementation.
//! - `NpmInstaller` is the real implementation. It runs the configured program
//!   inside the project root with the terminal attached and maps a nonzero
//!   exit onto `KickoffError::InstallFailure`.
//!
use crate::common::process;
use crate::core::error::{KickoffError, Result};
use anyhow::anyhow;
use async_trait::async_trait;
use std::path::Path;
use tracing::{error, info};

/// How installed packages are recorded in `package.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// `dependencies` (`--save`).
    Runtime,
    /// `devDependencies` (`--save-dev`).
    Dev,
}

impl SaveMode {
    pub fn flag(self) -> &'static str {
        match self {
            SaveMode::Runtime => "--save",
            SaveMode::Dev => "--save-dev",
        }
    }
}

/// Builds `install <flag> packages...`.
pub fn install_args(packages: &[&str], mode: SaveMode) -> Vec<String> {
    let mut args = vec!["install".to_string(), mode.flag().to_string()];
    args.extend(packages.iter().map(|p| p.to_string()));
    args
}

/// Installs a group of packages into a project.
#[async_trait]
pub trait PackageInstaller {
    /// Resolves once the installation finished successfully.
    ///
    /// # Errors
    ///
    /// `KickoffError::InstallFailure` when the package manager exits nonzero.
    async fn install(&self, packages: &[&str], mode: SaveMode, project_dir: &Path) -> Result<()>;
}

/// Runs `npm` (or a configured replacement) as a child process.
#[derive(Debug, Clone)]
pub struct NpmInstaller {
    program: String,
}

impl NpmInstaller {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl PackageInstaller for NpmInstaller {
    async fn install(&self, packages: &[&str], mode: SaveMode, project_dir: &Path) -> Result<()> {
        if packages.is_empty() {
            info!("No packages to install for {:?}, skipping", mode);
            return Ok(());
        }
        let args = install_args(packages, mode);
        let status = process::run_command_streamed(&self.program, &args, Some(project_dir)).await?;

        if !status.success() {
            error!("'{} {}' failed: {}", self.program, args.join(" "), status);
            return Err(anyhow!(KickoffError::InstallFailure {
                program: self.program.clone(),
                code: status.code(),
            }));
        }
        Ok(())
    }
}
