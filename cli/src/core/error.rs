//! # Kickoff Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error taxonomy used throughout the scaffolding
//! pipeline. Errors that callers need to react to (unsupported project type,
//! an existing target directory, a failed package installation, ...) get a
//! dedicated `KickoffError` variant. Everything else travels as a plain
//! `anyhow::Error` with context attached.
//!
//! ## Architecture
//!
//! - `KickoffError`: A custom error enum derived with `thiserror`.
//! - `Result<T>`: A type alias for `anyhow::Result<T>`.
//!
//! Typed variants are wrapped into `anyhow::Error` at the point they are
//! raised and recovered with `downcast_ref` where behaviour depends on them
//! (the orchestrator turns `NotSupported` into a rejected outcome, `main` maps
//! `InstallFailure` onto the child's exit code).
//!
//! ## Examples
//!
//! ```rust
//! // Raise a typed error
//! if target.exists() {
//!     return Err(anyhow!(KickoffError::DirectoryExists { path: target }));
//! }
//!
//! // React to a specific variant
//! if let Some(KickoffError::InstallFailure { program, code }) = err.downcast_ref::<KickoffError>() {
//!     println!("{} exited with code {:?}", program, code);
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Kickoff application.
#[derive(Error, Debug)]
pub enum KickoffError {
    #[error("Type \"{project_type}\" not yet supported.")]
    NotSupported { project_type: String },

    #[error("Invalid project name '{name}': expected a single directory name.")]
    InvalidProjectName { name: String },

    #[error("Cannot create project directory '{}': an entry with that name already exists.", .path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Permission denied while creating '{}'.", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Starter template file '{}' is missing.", .path.display())]
    MissingTemplateFile { path: PathBuf },

    #[error("Default manifest '{}' is invalid: {reason}", .path.display())]
    InvalidManifestTemplate { path: PathBuf, reason: String },

    /// `code` is `None` when the child was terminated by a signal.
    #[error("{program} exited with code {}", .code.map_or_else(|| "?".to_string(), |c| c.to_string()))]
    InstallFailure { program: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
