//! Release downloader implementation using reqwest.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::AppError;
use crate::ports::Downloader;

/// Blocking HTTP downloader.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
}

impl HttpDownloader {
    /// Builds a client without a request deadline; the blocking client
    /// would otherwise cut large tarball transfers off after 30 seconds.
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        println!("Downloading {} to {}...", url, dest.display());

        let download_error = |source| AppError::Download { url: url.to_string(), source };
        let mut response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(download_error)?;

        let mut file =
            File::create(dest).map_err(|e| AppError::path_io("Failed to create", dest, e))?;
        let bytes = response.copy_to(&mut file).map_err(download_error)?;
        log::debug!("wrote {} bytes to {}", bytes, dest.display());

        println!("Download complete.");
        Ok(())
    }
}
