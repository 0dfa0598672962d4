use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, CommandLine};
use crate::ports::CommandRunner;

/// Runs commands as child processes sharing this process's stdio.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), AppError> {
        log::debug!("running '{}' in {}", command, cwd.display());

        let status = Command::new(command.program())
            .args(command.args())
            .current_dir(cwd)
            .status()
            .map_err(|source| AppError::CommandSpawn { command: command.to_string(), source })?;

        if !status.success() {
            return Err(AppError::CommandFailed { command: command.to_string(), status });
        }
        Ok(())
    }
}
