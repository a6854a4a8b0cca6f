//! # Kickoff Filesystem I/O Utilities
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Basic file and directory helpers used while materializing a project:
//! - `ensure_dir_exists`: `mkdir -p` that refuses to treat a file as a directory
//! - `read_file_to_string`: read with a path in the error context
//! - `write_string_to_file`: write, creating parent directories first
//! - `write_new_file`: write bytes to a path that must not exist yet
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(&project.join("node_modules"))?;
//! io::write_string_to_file(&project.join("src/main.js"), "console.log('Hello World');\n")?;
//! ```
//!
use crate::core::error::{KickoffError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, it is created along with any missing parents.
/// If the path exists but is not a directory, `KickoffError::FileSystem` is returned.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        debug!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(KickoffError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file, overwriting if it exists.
///
/// The parent directory is created first when it is missing.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}

/// Writes raw bytes to a new file, creating parent directories first.
///
/// Unlike `write_string_to_file`, an existing file is never overwritten:
/// `KickoffError::FileSystem` is returned instead.
pub fn write_new_file(path: &Path, content: &[u8]) -> Result<()> {
    if path.exists() {
        anyhow::bail!(KickoffError::FileSystem(format!(
            "Refusing to overwrite existing path: {:?}",
            path
        )));
    }
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote {} bytes to new file: {:?}", content.len(), path);
    Ok(())
}
