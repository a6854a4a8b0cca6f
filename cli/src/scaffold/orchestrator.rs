//! # Kickoff Scaffold Orchestrator
//!
//! File: cli/src/scaffold/orchestrator.rs
//!
//! ## Overview
//!
//! Sequences one `create_project` call:
//!
//! ```text
//! Start -> RegistryLookup -> Materializing -> InstallingRuntime -> InstallingDev -> Done
//!               |                  |                 |                  |
//!            Rejected           Aborted           Aborted            Aborted
//! ```
//!
//! ## Architecture
//!
//! - An unsupported type ends in `Rejected`: a message is printed and the call
//!   returns normally, before anything touches the filesystem.
//! - Materialization is synchronous and must finish completely before the
//!   first install starts.
//! - The two installs are awaited one after the other. The dev install is
//!   never started unless the runtime install succeeded.
//! - Any error ends in `Aborted` and is returned to the caller unchanged.
//!   Nothing is rolled back.
//!
use crate::core::error::{KickoffError, Result};
use crate::scaffold::installer::{PackageInstaller, SaveMode};
use crate::scaffold::materializer::Materializer;
use crate::scaffold::registry::{self, ScaffoldDescriptor};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Progress of one `create_project` call. Only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldState {
    Start,
    RegistryLookup,
    Materializing,
    InstallingRuntime,
    InstallingDev,
    Done,
    Rejected,
    Aborted,
}

/// How a `create_project` call ended, short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// Project fully created at this path.
    Created(PathBuf),
    /// The requested type has no descriptor; nothing was written.
    Rejected(String),
}

/// Runs the scaffolding pipeline with an injected materializer and installer.
pub struct Scaffolder<I> {
    materializer: Materializer,
    installer: I,
}

impl<I: PackageInstaller> Scaffolder<I> {
    /// Creates a scaffolder from its two collaborators.
    pub fn new(materializer: Materializer, installer: I) -> Self {
        Self {
            materializer,
            installer,
        }
    }

    /// # Create Project (`create_project`)
    ///
    /// Scaffolds project `name` of `project_type` inside `parent_dir`:
    /// 1. Resolves the type with `resolve_type`; an unsupported type returns
    ///    `Rejected` without touching the filesystem.
    /// 2. Materializes the project skeleton.
    /// 3. Installs the runtime packages, then the dev packages, both inside the
    ///    new project root.
    ///
    /// ## Arguments
    /// * `name` - Project name and directory name.
    /// * `project_type` - Type name as typed by the user (e.g. `"node"`).
    /// * `parent_dir` - Directory the project is created in.
    ///
    /// ## Returns
    /// * `Result<ScaffoldOutcome>` - `Created(root)` or `Rejected(type)`.
    /// * `Err` - The first materialization or installation error, unchanged.
    pub async fn create_project(
        &self,
        name: &str,
        project_type: &str,
        parent_dir: &Path,
    ) -> Result<ScaffoldOutcome> {
        let mut state = ScaffoldState::Start;
        let result = self
            .run(name, project_type, parent_dir, &mut state)
            .await;
        if result.is_err() {
            transition(&mut state, ScaffoldState::Aborted);
        }
        result
    }

    async fn run(
        &self,
        name: &str,
        project_type: &str,
        parent_dir: &Path,
        state: &mut ScaffoldState,
    ) -> Result<ScaffoldOutcome> {
        transition(state, ScaffoldState::RegistryLookup);
        let descriptor = match resolve_type(project_type)? {
            Some(descriptor) => descriptor,
            None => {
                transition(state, ScaffoldState::Rejected);
                return Ok(ScaffoldOutcome::Rejected(project_type.to_string()));
            }
        };

        transition(state, ScaffoldState::Materializing);
        let project_root = self.materializer.materialize(descriptor, parent_dir, name)?;

        transition(state, ScaffoldState::InstallingRuntime);
        println!("Installing packages ...");
        self.installer
            .install(descriptor.runtime_packages, SaveMode::Runtime, &project_root)
            .await?;

        transition(state, ScaffoldState::InstallingDev);
        println!("Installing dev packages ...");
        self.installer
            .install(descriptor.dev_packages, SaveMode::Dev, &project_root)
            .await?;

        transition(state, ScaffoldState::Done);
        println!("Project created successfully.");
        Ok(ScaffoldOutcome::Created(project_root))
    }
}

/// # Resolve Project Type (`resolve_type`)
///
/// Looks up the descriptor for `project_type`. An unsupported type is not an
/// error: its message is printed and `None` returned.
///
/// ## Returns
/// * `Result<Option<&ScaffoldDescriptor>>` - `Some` for a supported type,
///   `None` after printing `Type "<type>" not yet supported.`.
/// * `Err` - Any other lookup error.
pub fn resolve_type(project_type: &str) -> Result<Option<&'static ScaffoldDescriptor>> {
    match registry::lookup(project_type) {
        Ok(descriptor) => Ok(Some(descriptor)),
        Err(e) => {
            if let Some(KickoffError::NotSupported { .. }) = e.downcast_ref::<KickoffError>() {
                println!("{}", e);
                return Ok(None);
            }
            Err(e)
        }
    }
}

/// Moves to `next`, logging the change. Entering `Aborted` logs at warn level.
fn transition(state: &mut ScaffoldState, next: ScaffoldState) {
    if next == ScaffoldState::Aborted {
        warn!("Scaffold aborted during {:?}", state);
    } else {
        debug!("Scaffold state {:?} -> {:?}", state, next);
    }
    *state = next;
}
