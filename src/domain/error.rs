use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Library-wide error type for pcre2-vendor operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure tied to a specific path.
    #[error("{action} '{path}': {source}")]
    PathIo {
        action: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Code unit width outside of 8, 16 and 32.
    #[error("Invalid code unit width '{0}': must be one of 8, 16, 32")]
    InvalidCodeUnitWidth(u32),

    /// Required file missing from the extracted release.
    #[error("Source file not found: {0}")]
    SourceFileMissing(String),

    /// HTTP transport or status failure while downloading.
    #[error("Download of '{url}' failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Downloaded archive does not match the configured digest.
    #[error("Checksum mismatch for '{path}': expected {expected}, got {actual}")]
    ChecksumMismatch { path: String, expected: String, actual: String },

    /// Archive could not be expanded.
    #[error("Failed to extract '{path}': {source}")]
    Archive {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Package descriptor is not a JSON object.
    #[error("Package descriptor '{path}' is invalid: {details}")]
    InvalidDescriptor { path: String, details: String },

    /// Descriptor (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// External command could not be spawned.
    #[error("Failed to run '{command}': {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// External command exited unsuccessfully.
    #[error("Command '{command}' failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn path_io(action: &'static str, path: &std::path::Path, source: io::Error) -> Self {
        AppError::PathIo { action, path: path.display().to_string(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::PathIo { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::InvalidCodeUnitWidth(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::SourceFileMissing(_) => io::ErrorKind::NotFound,
            AppError::ChecksumMismatch { .. }
            | AppError::Archive { .. }
            | AppError::InvalidDescriptor { .. }
            | AppError::Json(_) => io::ErrorKind::InvalidData,
            AppError::CommandSpawn { source, .. } => source.kind(),
            AppError::Download { .. } | AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
