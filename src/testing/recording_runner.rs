use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::Mutex;

use walkdir::WalkDir;

use crate::domain::{AppError, CommandLine};
use crate::ports::CommandRunner;

/// A command invocation observed by [`RecordingRunner`].
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub command: String,
    pub cwd: PathBuf,
    /// Files below `cwd` at the time of the call, relative and sorted.
    pub files: Vec<String>,
}

/// Runner that records invocations and optionally fails a given command.
#[derive(Default)]
pub struct RecordingRunner {
    fail_on: Option<String>,
    pub runs: Mutex<Vec<RecordedRun>>,
}

impl RecordingRunner {
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Fail (exit status 1) whenever `command` is run.
    pub fn failing_on(command: &CommandLine) -> Self {
        Self { fail_on: Some(command.to_string()), runs: Mutex::new(Vec::new()) }
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.runs().into_iter().map(|run| run.command).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<(), AppError> {
        let files = WalkDir::new(cwd)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                entry.path().strip_prefix(cwd).ok().map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        let rendered = command.to_string();
        self.runs.lock().unwrap().push(RecordedRun {
            command: rendered.clone(),
            cwd: cwd.to_path_buf(),
            files,
        });

        if self.fail_on.as_deref() == Some(rendered.as_str()) {
            return Err(AppError::CommandFailed { command: rendered, status: failed_status() });
        }
        Ok(())
    }
}

#[cfg(unix)]
fn failed_status() -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(1 << 8)
}

#[cfg(windows)]
fn failed_status() -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(1)
}
