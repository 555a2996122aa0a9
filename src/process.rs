// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! External command invocation
//!
//! The installer shells out to `tar`, `mv` and `rm`, and the
//! current-version probe runs `go version`. All of it goes through the
//! [`CommandRunner`] trait so tests can substitute a fake without
//! touching real tools. Invocations are synchronous and have no timeout;
//! a hung command hangs the run.

use std::process::{Command, Output};

use thiserror::Error;

/// Failure of a single external command
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The command could not be started at all
    #[error("failed to spawn: {0}")]
    Spawn(#[source] std::io::Error),

    /// The command ran but exited non-zero
    #[error("exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Capability to run an external command and collect its output
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits
    ///
    /// # Errors
    /// Returns [`ProcessError::Spawn`] if the command cannot be started
    /// and [`ProcessError::Failed`] on a non-zero exit status.
    fn run(&self, program: &str, args: &[&str]) -> Result<Output, ProcessError>;
}

/// The real runner backed by `std::process::Command`
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Output, ProcessError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(ProcessError::Spawn)?;

        if !output.status.success() {
            return Err(ProcessError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output)
    }
}
