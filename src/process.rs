//! External command execution
//!
//! Package manager and artisan calls go through [`ProcessRunner`] so the
//! scaffold steps can be exercised without npm or PHP installed.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub success: bool,
    /// Captured stderr, trimmed
    pub error_output: String,
}

impl ProcessResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error_output: String::new(),
        }
    }

    pub fn failed(error_output: impl Into<String>) -> Self {
        Self {
            success: false,
            error_output: error_output.into(),
        }
    }
}

/// Trait for running external commands
pub trait ProcessRunner {
    /// Run `command` (program followed by its arguments) to completion in `cwd`
    ///
    /// A program that cannot be started is an unsuccessful result, not an error.
    fn run(&self, command: &[String], cwd: &Path) -> Result<ProcessResult>;
}

/// Runs commands with `std::process::Command`, without a timeout
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &[String], cwd: &Path) -> Result<ProcessResult> {
        let (program, args) = command.split_first().context("Empty command")?;

        // Resolve through PATH first so `npm.cmd` style shims work on Windows
        let executable = which::which(program).unwrap_or_else(|_| PathBuf::from(program));

        match Command::new(&executable).args(args).current_dir(cwd).output() {
            Ok(output) => Ok(ProcessResult {
                success: output.status.success(),
                error_output: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            }),
            Err(e) => Ok(ProcessResult::failed(format!(
                "Failed to run `{}`: {e}",
                command.join(" ")
            ))),
        }
    }
}

/// Check if a program is on PATH
pub fn is_available(program: &str) -> bool {
    which::which(program).is_ok()
}
