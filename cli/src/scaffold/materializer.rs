//! # Kickoff Filesystem Materializer
//!
//! File: cli/src/scaffold/materializer.rs
//!
//! ## Overview
//!
//! Turns a `ScaffoldDescriptor` and a project name into a project skeleton on
//! disk. The starter kit is injected at construction, so nothing here depends
//! on where the binary lives or on the process working directory.
//!
//! ## Architecture
//!
//! Before anything is written, the project name must be a single plain path
//! component and the starter must exist in the kit. `Materializer::materialize`
//! then runs five steps in order, each finishing before the next starts. The
//! first failure aborts the remaining steps; files already written are left in
//! place.
//!
//! 1. Create the project root (must not exist yet)
//! 2. Write `package.json` from the starter's default manifest
//! 3. Copy config files and directories from the starter
//! 4. Create the descriptor's directories
//! 5. Write seed files
//!
use crate::common::fs::io;
use crate::core::error::{KickoffError, Result};
use crate::scaffold::manifest::{ProjectManifest, MANIFEST};
use crate::scaffold::registry::ScaffoldDescriptor;
use crate::scaffold::starter::StarterKit;
use anyhow::{anyhow, Context};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info};

/// Writes project skeletons from a starter kit.
#[derive(Debug, Clone)]
pub struct Materializer {
    kit: StarterKit,
}

impl Materializer {
    pub fn new(kit: StarterKit) -> Self {
        Self { kit }
    }

    /// # Materialize Project (`materialize`)
    ///
    /// Creates `parent_dir/name` and fills it according to `descriptor`:
    /// 1. Checks the project name and that the descriptor's starter exists.
    /// 2. Creates the project root with `create_project_root`.
    /// 3. Writes `package.json` from the starter's default manifest.
    /// 4. Copies config files with `copy_config_files`.
    /// 5. Creates the descriptor's directories and writes its seed files.
    ///
    /// ## Arguments
    /// * `descriptor` - What to create for the selected project type.
    /// * `parent_dir` - Directory the project root is created in.
    /// * `name` - Project name; also the directory name.
    ///
    /// ## Returns
    /// * `Result<PathBuf>` - The path of the new project root.
    /// * `Err` - `InvalidProjectName` or `MissingTemplateFile` before anything
    ///   is written, `DirectoryExists`/`PermissionDenied` from step 2, or the
    ///   first error of a later step.
    pub fn materialize(
        &self,
        descriptor: &ScaffoldDescriptor,
        parent_dir: &Path,
        name: &str,
    ) -> Result<PathBuf> {
        validate_project_name(name)?;
        self.kit.require_starter(descriptor.starter_id)?;
        info!(
            "Materializing '{}' from starter '{}'",
            name,
            self.kit.location(descriptor.starter_id, "").display()
        );

        println!("Creating directory \"{}\" ...", name);
        let project_root = create_project_root(&parent_dir.join(name))?;

        println!("Writing {} ...", MANIFEST);
        let mut manifest = ProjectManifest::load_default(&self.kit, descriptor.starter_id)?;
        manifest.customize(name);
        manifest.write_to(&project_root)?;

        println!("Copying config files ...");
        self.copy_config_files(descriptor, &project_root)?;

        println!("Creating directories ...");
        for dir in descriptor.directories {
            io::ensure_dir_exists(&project_root.join(dir))?;
        }

        for (path, content) in descriptor.seed_files {
            io::write_string_to_file(&project_root.join(path), content)?;
        }

        Ok(project_root)
    }

    /// # Copy Config Files (`copy_config_files`)
    ///
    /// Copies every `(source, destination)` pair of the descriptor from the
    /// starter into the project root, in declaration order. An empty
    /// destination keeps the source's base name.
    ///
    /// ## Arguments
    /// * `descriptor` - Supplies the starter id and the config file pairs.
    /// * `project_root` - The freshly created project directory.
    ///
    /// ## Returns
    /// * `Result<()>` - `Ok(())` when all entries were copied.
    /// * `Err` - `KickoffError::MissingTemplateFile` for the first source that
    ///   does not exist; later pairs are not copied.
    fn copy_config_files(&self, descriptor: &ScaffoldDescriptor, project_root: &Path) -> Result<()> {
        for (source, destination) in descriptor.config_files {
            let target_path = project_root.join(destination_for(source, destination));
            self.kit
                .copy_entry(descriptor.starter_id, source, &target_path)
                .with_context(|| format!("Failed to copy starter file '{}'", source))?;
        }
        Ok(())
    }
}

/// # Validate Project Name (`validate_project_name`)
///
/// The project is always created directly inside the working directory, so
/// the name must be exactly one normal path component: no separators, no
/// `.`/`..`, no root or drive prefix.
///
/// ## Returns
/// * `Result<()>` - `Ok(())` for a usable name.
/// * `Err` - `KickoffError::InvalidProjectName` otherwise.
fn validate_project_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(anyhow!(KickoffError::InvalidProjectName {
            name: name.to_string(),
        })),
    }
}

/// # Create Project Root (`create_project_root`)
///
/// Creates the project directory itself. The parent must already exist and
/// the directory must not.
///
/// ## Arguments
/// * `path` - Full path of the project root.
///
/// ## Returns
/// * `Result<PathBuf>` - The created path.
/// * `Err` - `DirectoryExists` when any entry already has that name,
///   `PermissionDenied` when the parent is not writable, other I/O errors with
///   context.
fn create_project_root(path: &Path) -> Result<PathBuf> {
    match fs::create_dir(path) {
        Ok(()) => {
            debug!("Created project root {:?}", path);
            Ok(path.to_path_buf())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(anyhow!(KickoffError::DirectoryExists {
                path: path.to_path_buf(),
            }))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(anyhow!(KickoffError::PermissionDenied {
                path: path.to_path_buf(),
            }))
        }
        Err(e) => {
            Err(anyhow!(e).context(format!("Failed to create project directory {:?}", path)))
        }
    }
}

/// An empty destination keeps the source's base name at the project root.
fn destination_for<'a>(source: &'a str, destination: &'a str) -> &'a Path {
    if destination.is_empty() {
        Path::new(source)
            .file_name()
            .map(Path::new)
            .unwrap_or_else(|| Path::new(source))
    } else {
        Path::new(destination)
    }
}
