//! # Kickoff Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Copies starter-kit entries into a freshly created project. A starter entry
//! may be a single file (`default.babelrc`) or a whole directory (`test/`),
//! so `copy_path` dispatches on the source type.
//!
//! ## Architecture
//!
//! Both cases are delegated to the `fs_extra` crate:
//! - files go through `fs_extra::file::copy`
//! - directories go through `fs_extra::dir::copy` with `copy_inside`, so the
//!   target path *becomes* the copied directory instead of receiving it as a
//!   child.
//!
//! Overwriting is disabled in both cases: the target must not exist yet.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::copy;
//!
//! copy::copy_path(&starter.join("test"), &project.join("test"))?;
//! copy::copy_path(&starter.join("default.babelrc"), &project.join(".babelrc"))?;
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{KickoffError, Result};
use anyhow::anyhow;
use std::path::Path;
use tracing::debug;

/// Copies a file or a directory tree from `source` to `target`.
///
/// Parent directories of `target` are created when missing. The copy never
/// overwrites: an existing `target` is an error.
///
/// # Errors
///
/// - `KickoffError::FileSystem` if `source` does not exist.
/// - Any `fs_extra` failure, wrapped with context naming both paths.
pub fn copy_path(source: &Path, target: &Path) -> Result<()> {
    if !source.exists() {
        return Err(anyhow!(KickoffError::FileSystem(format!(
            "Copy source does not exist: {:?}",
            source
        ))));
    }
    if let Some(parent) = target.parent() {
        io::ensure_dir_exists(parent)?;
    }

    if source.is_dir() {
        copy_directory_recursive(source, target)
    } else {
        copy_file(source, target)
    }
}

/// Copies a directory recursively so that `target` mirrors `source`.
pub fn copy_directory_recursive(source: &Path, target: &Path) -> Result<()> {
    debug!("Copying directory {:?} -> {:?}", source, target);

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = false;
    // `target` is the new directory itself, not a parent to copy into.
    options.copy_inside = true;

    fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow!(e).context(format!("Failed to copy dir {:?} to {:?}", source, target))
    })?;
    Ok(())
}

fn copy_file(source: &Path, target: &Path) -> Result<()> {
    debug!("Copying file {:?} -> {:?}", source, target);

    let options = fs_extra::file::CopyOptions::new();
    fs_extra::file::copy(source, target, &options).map_err(|e| {
        anyhow!(e).context(format!("Failed to copy file {:?} to {:?}", source, target))
    })?;
    Ok(())
}
