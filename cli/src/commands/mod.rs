//! # Kickoff Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level commands of the Kickoff CLI. Each module defines its clap
//! arguments struct and an async `handle_*` function called from `main.rs`.
//!
//! - `init`: scaffold a new project
//! - `list`: show the accepted project types
//!

/// `kickoff init <project_name>`.
pub mod init;
/// `kickoff list`.
pub mod list;
