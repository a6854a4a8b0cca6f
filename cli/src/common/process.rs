//! # Kickoff Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs an external program with the terminal attached, so the user sees the
//! program's own progress output live (npm's install log, for instance).
//!
//! ## Architecture
//!
//! `run_command_streamed` spawns the program through `tokio::process::Command`
//! with stdin, stdout and stderr inherited from Kickoff, optionally in a given
//! working directory, and awaits its termination. It returns the raw
//! `ExitStatus` so callers decide what a nonzero exit means for them.
//!
//! A failure to *spawn* (program not found, not executable) is an error here;
//! a program that ran and exited nonzero is not.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use tracing::{debug, info};

/// Spawns `program args...` with inherited stdio and waits for it to exit.
pub async fn run_command_streamed(
    program: &str,
    args: &[String],
    cwd: Option<&Path>,
) -> Result<ExitStatus> {
    info!("Executing command: {} {:?}", program, args);
    let mut command = tokio::process::Command::new(program);
    command.args(args);
    if let Some(dir) = cwd {
        command.current_dir(dir);
        debug!("Setting CWD for command to {}", dir.display());
    }

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().await.with_context(|| {
        format!(
            "Failed to execute command '{}'. Is it installed and in PATH?",
            program
        )
    })?;

    debug!("Command '{}' finished with {}", program, status);
    Ok(status)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_exit_status_is_reported() -> Result<()> {
        let ok = run_command_streamed("sh", &["-c".into(), "exit 0".into()], None).await?;
        assert!(ok.success());

        let failed = run_command_streamed("sh", &["-c".into(), "exit 3".into()], None).await?;
        assert_eq!(failed.code(), Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn test_runs_in_given_directory() -> Result<()> {
        let dir = tempdir()?;
        let status = run_command_streamed(
            "sh",
            &["-c".into(), "touch marker".into()],
            Some(dir.path()),
        )
        .await?;
        assert!(status.success());
        assert!(dir.path().join("marker").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let result =
            run_command_streamed("kickoff-definitely-not-a-program", &[], None).await;
        assert!(result.is_err());
    }
}
