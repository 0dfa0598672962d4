//! pcre2-vendor: vendor the PCRE2 C library into a MoonBit package and publish it.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use app::AppContext;
use app::commands::{fetch, prepare, publish};
use domain::configuration::{CONFIG_FILE, load_config};
use services::{HttpDownloader, ProcessCommandRunner};

pub use app::commands::fetch::FetchOutcome;
pub use app::commands::prepare::{PrepareOptions, PrepareOutcome, VendorOutcome, prepare_sources};
pub use app::commands::publish::PublishOutcome;
pub use domain::{AppError, CodeUnitWidth, VendorConfig};

/// Options shared by every command.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Project root; defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Configuration file; defaults to `<root>/vendor.toml`.
    pub config: Option<PathBuf>,
    /// Overrides `prepare.code_unit_width`.
    pub code_unit_width: Option<CodeUnitWidth>,
}

/// Download and extract the configured PCRE2 release.
pub fn fetch(options: &CommandOptions) -> Result<FetchOutcome, AppError> {
    let ctx = build_context(options)?;
    let outcome = fetch::execute(&ctx)?;
    println!("✅ Fetched release into {}", outcome.release_root.display());
    Ok(outcome)
}

/// Fetch the release, vendor its sources into the package and sync `deps/`.
pub fn prepare(options: &CommandOptions) -> Result<VendorOutcome, AppError> {
    let ctx = build_context(options)?;
    let outcome = prepare::execute(&ctx)?;
    println!(
        "✅ Prepared {} files in {}",
        outcome.prepare.manifest.len(),
        outcome.prepare.target.display()
    );
    Ok(outcome)
}

/// Stage, test and publish the package.
pub fn publish(options: &CommandOptions) -> Result<PublishOutcome, AppError> {
    let ctx = build_context(options)?;
    let outcome = publish::execute(&ctx)?;
    println!("✅ Published from {}", outcome.publish_dir.display());
    Ok(outcome)
}

fn build_context(
    options: &CommandOptions,
) -> Result<AppContext<HttpDownloader, ProcessCommandRunner>, AppError> {
    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let mut config = load_config(&config_path(&root, options.config.as_deref()))?;
    if let Some(width) = options.code_unit_width {
        config.prepare.code_unit_width = width;
    }
    Ok(AppContext::new(root, config, HttpDownloader::new()?, ProcessCommandRunner::new()))
}

fn config_path(root: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => root.join(path),
        None => root.join(CONFIG_FILE),
    }
}
