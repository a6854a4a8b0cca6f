//! # Kickoff Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the project materializer:
//!
//! - **`copy`**: copies starter files and directories into a project (`fs_extra`).
//! - **`io`**: directory creation, reading and writing strings.
//!
//! Callers import the submodule they need, e.g. `crate::common::fs::io`.
//!

/// Copying of files and directory trees (e.g., `copy_path`).
pub mod copy;
/// Basic file I/O (e.g., `ensure_dir_exists`, `write_string_to_file`).
pub mod io;
