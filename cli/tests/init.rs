//! # Kickoff CLI Init Integration Tests
//!
//! File: cli/tests/init.rs
//!
//! ## Overview
//!
//! End-to-end runs of `kickoff init` against the embedded starter kit. The
//! package manager is replaced through `KICKOFF_PACKAGE_MANAGER` by a shell
//! script that records its arguments, so no network access is needed.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_react_native_creates_nothing() {
    let work = tempdir().unwrap();

    kickoff_cmd()
        .current_dir(work.path())
        .args(["init", "app", "--type", "react-native"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Type \"react-native\" not yet supported.",
        ));

    assert!(!work.path().join("app").exists());
}

#[test]
fn test_existing_directory_fails_fast() {
    let work = tempdir().unwrap();
    fs::create_dir(work.path().join("app")).unwrap();

    kickoff_cmd()
        .current_dir(work.path())
        .env("KICKOFF_PACKAGE_MANAGER", "kickoff-definitely-not-a-program")
        .args(["init", "app", "-t", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_dir(work.path().join("app")).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_node_project_end_to_end() {
    let work = tempdir().unwrap();
    let bin = tempdir().unwrap();
    let npm = fake_npm(bin.path(), "exit 0");

    kickoff_cmd()
        .current_dir(work.path())
        .env("KICKOFF_PACKAGE_MANAGER", &npm)
        .args(["init", "foo", "-t", "node"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Creating directory \"foo\" ...")
                .and(predicate::str::contains("Installing dev packages ..."))
                .and(predicate::str::contains("Project created successfully.")),
        );

    let project = work.path().join("foo");
    assert!(project.join(".npmignore").is_file());
    assert!(project.join("lib").is_dir());
    assert_eq!(
        fs::read_to_string(project.join("src/main.js")).unwrap(),
        "console.log('Hello World');\n"
    );

    // Both installs ran, in order, inside the project root.
    let calls = fs::read_to_string(project.join("npm-calls.txt")).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "install --save denodeify");
    assert!(lines[1].starts_with("install --save-dev babel-core"));
}

#[cfg(unix)]
#[test]
fn test_runtime_install_failure_stops_before_dev() {
    let work = tempdir().unwrap();
    let bin = tempdir().unwrap();
    let npm = fake_npm(bin.path(), "exit 3");

    kickoff_cmd()
        .current_dir(work.path())
        .env("KICKOFF_PACKAGE_MANAGER", &npm)
        .args(["init", "bar"])
        .assert()
        .code(3)
        .stdout(
            predicate::str::contains("exited with code 3")
                .and(predicate::str::contains("Installing dev packages").not()),
        );

    let calls = fs::read_to_string(work.path().join("bar/npm-calls.txt")).unwrap();
    assert_eq!(calls.lines().count(), 1);
    assert!(calls.starts_with("install --save react react-dom"));
}

#[test]
fn test_unsupported_type_ignores_broken_config() {
    let work = tempdir().unwrap();
    fs::write(
        work.path().join(".kickoff.toml"),
        "[installer]\nprogrm = \"yarn\"\n",
    )
    .unwrap();

    kickoff_cmd()
        .current_dir(work.path())
        .args(["init", "app", "-t", "react-native"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Type \"react-native\" not yet supported.",
        ));

    assert!(!work.path().join("app").exists());
}

#[test]
fn test_empty_starter_dir_creates_nothing() {
    let work = tempdir().unwrap();
    let kit = tempdir().unwrap();

    kickoff_cmd()
        .current_dir(work.path())
        .env("KICKOFF_STARTER_DIR", kit.path())
        .env("KICKOFF_PACKAGE_MANAGER", "kickoff-definitely-not-a-program")
        .args(["init", "foo", "-t", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is missing"));

    assert!(!work.path().join("foo").exists());
}

#[test]
fn test_name_outside_working_directory_is_rejected() {
    let outer = tempdir().unwrap();
    let work = outer.path().join("work");
    fs::create_dir(&work).unwrap();

    kickoff_cmd()
        .current_dir(&work)
        .env("KICKOFF_PACKAGE_MANAGER", "kickoff-definitely-not-a-program")
        .args(["init", "../escaped", "-t", "node"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!outer.path().join("escaped").exists());
}

#[cfg(unix)]
#[test]
fn test_killed_package_manager_exits_one() {
    let work = tempdir().unwrap();
    let bin = tempdir().unwrap();
    let npm = fake_npm(bin.path(), "kill -9 $$");

    kickoff_cmd()
        .current_dir(work.path())
        .env("KICKOFF_PACKAGE_MANAGER", &npm)
        .args(["init", "baz", "-t", "node"])
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("exited with code ?")
                .and(predicate::str::contains("Installing dev packages").not()),
        );

    let calls = fs::read_to_string(work.path().join("baz/npm-calls.txt")).unwrap();
    assert_eq!(calls.lines().count(), 1);
}

#[cfg(unix)]
#[test]
fn test_relocated_binary_carries_starter_kit() {
    use std::os::unix::fs::PermissionsExt;

    let work = tempdir().unwrap();
    let bin = tempdir().unwrap();
    let npm = fake_npm(bin.path(), "exit 0");
    let relocated = bin.path().join("kickoff-relocated");
    fs::copy(assert_cmd::cargo::cargo_bin("kickoff"), &relocated).unwrap();
    fs::set_permissions(&relocated, fs::Permissions::from_mode(0o755)).unwrap();

    Command::new(&relocated)
        .current_dir(work.path())
        .env_remove("KICKOFF_STARTER_DIR")
        .env("KICKOFF_PACKAGE_MANAGER", &npm)
        .args(["init", "moved", "-t", "react"])
        .assert()
        .success();

    let project = work.path().join("moved");
    assert!(project.join("webpack.config.js").is_file());
    assert!(project.join("flow/css-module.js").is_file());
    assert!(project.join(".babelrc").is_file());
}
