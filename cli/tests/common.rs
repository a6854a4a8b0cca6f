//! # Kickoff CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! is compiled as its own crate and pulls this module in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// An `assert_cmd::Command` for the compiled `kickoff` binary.
///
/// `RUST_LOG` is cleared so log output never leaks into assertions, and the
/// starter-kit override so the embedded kit is used unless a test sets one.
pub fn kickoff_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kickoff").expect("Failed to find kickoff binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("KICKOFF_STARTER_DIR");
    cmd
}

/// Writes an executable shell script that stands in for npm.
///
/// The script appends its arguments to `npm-calls.txt` in its working
/// directory and then runs `body`.
#[cfg(unix)]
pub fn fake_npm(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-npm");
    fs::write(
        &script,
        format!("#!/bin/sh\necho \"$@\" >> npm-calls.txt\n{}\n", body),
    )
    .expect("Failed to write fake npm");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake npm executable");
    script
}
