use std::path::Path;

use crate::domain::{AppError, CommandLine};

/// Runs external programs to completion.
pub trait CommandRunner {
    /// Run `command` inside `cwd`. A non-zero exit is an error.
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), AppError>;
}
