use std::path::{Path, PathBuf};

use crate::domain::VendorConfig;
use crate::ports::{CommandRunner, Downloader};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: Downloader, R: CommandRunner> {
    root: PathBuf,
    config: VendorConfig,
    downloader: D,
    runner: R,
}

impl<D: Downloader, R: CommandRunner> AppContext<D, R> {
    /// Create a new application context rooted at the project directory.
    pub fn new(root: PathBuf, config: VendorConfig, downloader: D, runner: R) -> Self {
        Self { root, config, downloader, runner }
    }

    /// Project root every configured path is relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &VendorConfig {
        &self.config
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
