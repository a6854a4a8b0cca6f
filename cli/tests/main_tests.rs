//! # Kickoff CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//!
//! ## Overview
//!
//! Top-level behaviour of the `kickoff` binary: `--version`, `--help`, and
//! what happens when no subcommand is given.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    kickoff_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_commands_and_type_option() {
    kickoff_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("list"))
                .and(predicate::str::contains("--type")),
        );
}

#[test]
fn test_no_subcommand_prints_help() {
    kickoff_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_type_rejected_by_parser() {
    kickoff_cmd()
        .args(["init", "app", "--type", "vue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'vue'"));
}

#[test]
fn test_list_shows_types() {
    kickoff_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("react-web")
                .and(predicate::str::contains("react-native"))
                .and(predicate::str::contains("not yet supported")),
        );
}
