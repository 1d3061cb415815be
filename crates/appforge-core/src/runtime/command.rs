//! External command execution with an explicit result channel
//!
//! Package-manager and generator invocations go through `CommandRunner`,
//! which waits for the exit status and reports it according to the
//! configured policy instead of firing and forgetting.

use crate::error::ScaffoldError;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// How a non-zero exit status is reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Warn and keep going
    Advisory,
    /// Surface `CommandFailed`, failing the unit that issued the command
    Strict,
}

/// Runs external commands in a fixed working directory
#[derive(Debug, Clone)]
pub struct CommandRunner {
    cwd: PathBuf,
    policy: FailurePolicy,
    enabled: bool,
}

impl CommandRunner {
    pub fn new(cwd: impl Into<PathBuf>, policy: FailurePolicy) -> Self {
        Self {
            cwd: cwd.into(),
            policy,
            enabled: true,
        }
    }

    /// Runner that skips execution entirely (`--skip-install`, tests).
    /// Every invocation reports success.
    pub fn disabled(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            policy: FailurePolicy::Advisory,
            enabled: false,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Run a command in the runner's working directory
    pub async fn run(&self, program: &str, args: &[&str]) -> Result<(), ScaffoldError> {
        self.run_in(&self.cwd, program, args).await
    }

    /// Run a command in an explicit working directory, waiting for it to
    /// finish. There is no timeout; an unresponsive command blocks the run.
    pub async fn run_in(
        &self,
        cwd: &Path,
        program: &str,
        args: &[&str],
    ) -> Result<(), ScaffoldError> {
        let rendered = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };

        if !self.enabled {
            println!("{} {}", "Skipping:".dimmed(), rendered);
            return Ok(());
        }

        println!("{} {}", "Running:".dimmed(), rendered.yellow());

        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .await
            .map_err(|e| ScaffoldError::io(PathBuf::from(program), e))?;

        if status.success() {
            return Ok(());
        }

        let code = status.code().unwrap_or(-1);
        match self.policy {
            FailurePolicy::Advisory => {
                eprintln!(
                    "{} `{}` exited with status {} - continuing",
                    "Warning:".yellow(),
                    rendered,
                    code
                );
                Ok(())
            }
            FailurePolicy::Strict => Err(ScaffoldError::CommandFailed {
                command: rendered,
                status: code,
            }),
        }
    }
}

/// Yarn invocations for adding project dependencies
#[derive(Debug, Clone)]
pub struct PackageManager {
    runner: CommandRunner,
}

impl PackageManager {
    pub fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    /// Access the underlying runner for non-package commands (generators)
    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// `yarn add <packages>`
    pub async fn add(&self, packages: &[&str]) -> Result<(), ScaffoldError> {
        let mut args = vec!["add"];
        args.extend_from_slice(packages);
        self.runner.run("yarn", &args).await
    }

    /// `yarn add -D <packages>`
    pub async fn add_dev(&self, packages: &[&str]) -> Result<(), ScaffoldError> {
        let mut args = vec!["add", "-D"];
        args.extend_from_slice(packages);
        self.runner.run("yarn", &args).await
    }

    /// `yarn add --dev --exact <packages>`
    pub async fn add_dev_exact(&self, packages: &[&str]) -> Result<(), ScaffoldError> {
        let mut args = vec!["add", "--dev", "--exact"];
        args.extend_from_slice(packages);
        self.runner.run("yarn", &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_runner_reports_success_without_executing() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::disabled(dir.path());
        runner
            .run("definitely-not-a-real-binary", &["--flag"])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_strict_policy_surfaces_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(dir.path(), FailurePolicy::Strict);
        let err = runner.run("false", &[]).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::CommandFailed { status: 1, .. }));
    }

    #[tokio::test]
    async fn test_advisory_policy_swallows_nonzero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(dir.path(), FailurePolicy::Advisory);
        runner.run("false", &[]).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_program_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let runner = CommandRunner::new(dir.path(), FailurePolicy::Advisory);
        let err = runner
            .run("definitely-not-a-real-binary", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }
}
