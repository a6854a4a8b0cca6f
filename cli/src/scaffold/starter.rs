//! # Kickoff Starter Kit
//!
//! File: cli/src/scaffold/starter.rs
//!
//! ## Overview
//!
//! Where starter templates are read from. Each starter is a directory named
//! after its `starter_id` holding a `default-package.json`, config files and
//! config directories.
//!
//! ## Architecture
//!
//! - `StarterKit::Bundled`: the `cli/starter/` tree compiled into the binary
//!   with `rust-embed`. This is the default, so an installed or relocated
//!   `kickoff` binary is self-contained.
//! - `StarterKit::Directory`: a starter-kit root on disk, selected through
//!   `[starters] directory` or `KICKOFF_STARTER_DIR`.
//!
//! Both sources answer the same three questions: does a starter exist, what is
//! the text of one of its files, and copy one entry (file or directory) into a
//! project. A missing entry is always `KickoffError::MissingTemplateFile`.
//!
use crate::common::fs::{copy, io};
use crate::core::error::{KickoffError, Result};
use anyhow::{anyhow, Context};
use rust_embed::RustEmbed;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(RustEmbed)]
#[folder = "starter/"]
struct BundledStarters;

/// Source of starter templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StarterKit {
    /// Templates compiled into the binary.
    Bundled,
    /// Templates under a directory on disk (`<root>/<starter_id>/...`).
    Directory(PathBuf),
}

impl StarterKit {
    /// Picks the on-disk kit when a directory is configured, the bundled one otherwise.
    pub fn from_setting(directory: Option<&str>) -> Self {
        match directory {
            Some(dir) => StarterKit::Directory(PathBuf::from(dir)),
            None => StarterKit::Bundled,
        }
    }

    /// Path of a starter entry, as shown in messages and errors.
    ///
    /// Bundled entries are reported relative to a virtual `<bundled>` root.
    pub fn location(&self, starter_id: &str, entry: &str) -> PathBuf {
        let root = match self {
            StarterKit::Bundled => PathBuf::from("<bundled>"),
            StarterKit::Directory(root) => root.clone(),
        };
        let starter = root.join(starter_id);
        if entry.is_empty() {
            starter
        } else {
            starter.join(entry)
        }
    }

    /// # Require Starter (`require_starter`)
    ///
    /// Checks that the starter directory for `starter_id` exists in this kit.
    /// Called before anything is written to disk.
    ///
    /// ## Arguments
    /// * `starter_id` - Directory name of the starter (e.g. `"node"`).
    ///
    /// ## Returns
    /// * `Result<()>` - `Ok(())` when the starter exists.
    /// * `Err` - `KickoffError::MissingTemplateFile` naming the starter directory otherwise.
    pub fn require_starter(&self, starter_id: &str) -> Result<()> {
        let present = match self {
            StarterKit::Bundled => !bundled_files_under(starter_id).is_empty(),
            StarterKit::Directory(root) => root.join(starter_id).is_dir(),
        };
        if present {
            Ok(())
        } else {
            Err(anyhow!(KickoffError::MissingTemplateFile {
                path: self.location(starter_id, ""),
            }))
        }
    }

    /// Reads one starter file as UTF-8 text.
    pub fn read_to_string(&self, starter_id: &str, entry: &str) -> Result<String> {
        let path = self.location(starter_id, entry);
        match self {
            StarterKit::Bundled => {
                let file = BundledStarters::get(&bundled_key(starter_id, entry))
                    .ok_or_else(|| anyhow!(KickoffError::MissingTemplateFile { path: path.clone() }))?;
                String::from_utf8(file.data.into_owned())
                    .with_context(|| format!("Starter file {:?} is not valid UTF-8", path))
            }
            StarterKit::Directory(_) => {
                if !path.is_file() {
                    return Err(anyhow!(KickoffError::MissingTemplateFile { path }));
                }
                io::read_file_to_string(&path)
            }
        }
    }

    /// # Copy Starter Entry (`copy_entry`)
    ///
    /// Copies the file or directory `entry` of a starter to `target`. A
    /// directory lands *as* `target`, with its contents inside. Existing
    /// files at the target are never overwritten.
    ///
    /// ## Arguments
    /// * `starter_id` - Directory name of the starter.
    /// * `entry` - Starter-relative path of the file or directory to copy.
    /// * `target` - Destination path inside the project.
    ///
    /// ## Returns
    /// * `Result<()>` - `Ok(())` when everything was copied.
    /// * `Err` - `KickoffError::MissingTemplateFile` if `entry` does not exist, or
    ///   a filesystem error from the copy.
    pub fn copy_entry(&self, starter_id: &str, entry: &str, target: &Path) -> Result<()> {
        match self {
            StarterKit::Bundled => {
                copy_bundled_entry(starter_id, entry, target, self.location(starter_id, entry))
            }
            StarterKit::Directory(_) => {
                let source = self.location(starter_id, entry);
                if !source.exists() {
                    return Err(anyhow!(KickoffError::MissingTemplateFile { path: source }));
                }
                copy::copy_path(&source, target)
            }
        }
    }
}

/// Embedded paths always use `/`, whatever the host platform.
fn bundled_key(starter_id: &str, entry: &str) -> String {
    format!("{}/{}", starter_id, entry.trim_matches('/'))
}

/// Every embedded file path below `prefix/`.
fn bundled_files_under(prefix: &str) -> Vec<String> {
    let dir_prefix = format!("{}/", prefix.trim_end_matches('/'));
    BundledStarters::iter()
        .filter(|path| path.starts_with(&dir_prefix))
        .map(|path| path.into_owned())
        .collect()
}

fn copy_bundled_entry(
    starter_id: &str,
    entry: &str,
    target: &Path,
    location: PathBuf,
) -> Result<()> {
    let key = bundled_key(starter_id, entry);

    if let Some(file) = BundledStarters::get(&key) {
        return io::write_new_file(target, &file.data);
    }

    let files = bundled_files_under(&key);
    if files.is_empty() {
        return Err(anyhow!(KickoffError::MissingTemplateFile { path: location }));
    }
    if target.exists() {
        anyhow::bail!(KickoffError::FileSystem(format!(
            "Refusing to overwrite existing path: {:?}",
            target
        )));
    }
    for path in files {
        let relative = &path[key.len() + 1..];
        let file = BundledStarters::get(&path)
            .ok_or_else(|| anyhow!(KickoffError::MissingTemplateFile { path: PathBuf::from(&path) }))?;
        io::write_new_file(&target.join(relative), &file.data)?;
    }
    debug!("Copied bundled directory '{}' to {:?}", key, target);
    Ok(())
}
