use std::path::Path;

use crate::domain::AppError;

/// Fetches a remote resource onto the local filesystem.
pub trait Downloader {
    /// Stream `url` into `dest`, replacing any existing file.
    fn download(&self, url: &str, dest: &Path) -> Result<(), AppError>;
}
