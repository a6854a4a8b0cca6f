//! # Kickoff Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational components used by every command:
//! - `config`: where the starter kit lives and which package manager to run
//! - `error`: the `KickoffError` taxonomy and the `Result` alias
//!
//! ```rust
//! use crate::core::config;
//! use crate::core::error::{KickoffError, Result};
//! ```
//!
pub mod config;
pub mod error;
