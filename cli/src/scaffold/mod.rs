//! # Kickoff Scaffolding Pipeline
//!
//! File: cli/src/scaffold/mod.rs
//!
//! ## Overview
//!
//! Everything needed to turn `(name, type)` into a ready-to-use project:
//!
//! - **`registry`**: supported project types and their `ScaffoldDescriptor`s.
//! - **`starter`**: the starter kit, embedded in the binary or on disk.
//! - **`manifest`**: reading and customising the starter's `package.json`.
//! - **`materializer`**: writing the project skeleton to disk.
//! - **`installer`**: running the package manager for one dependency group.
//! - **`orchestrator`**: sequencing lookup, materialization and both installs.
//!
//! ## Usage
//!
//! ```rust
//! let scaffolder = Scaffolder::new(
//!     Materializer::new(cfg.starters.kit()),
//!     NpmInstaller::new(&cfg.installer.program),
//! );
//! scaffolder.create_project("my-app", "react", &env::current_dir()?).await?;
//! ```
//!
pub mod installer;
pub mod manifest;
pub mod materializer;
pub mod orchestrator;
pub mod registry;
pub mod starter;
