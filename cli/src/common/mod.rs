//! # Kickoff Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, domain-agnostic helpers used by the scaffolding pipeline:
//!
//! - **`fs`**: file and directory copying, creation, reading and writing.
//! - **`process`**: running external programs with the terminal attached.
//!
//! Scaffolding-specific logic lives in `crate::scaffold`; this module only
//! knows about paths and processes.
//!
pub mod fs;
pub mod process;
