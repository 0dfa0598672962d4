//! Vendoring configuration loading.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::{AppError, VendorConfig};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = "vendor.toml";

/// Load `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<VendorConfig, AppError> {
    match fs::read_to_string(path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} not found, using built-in defaults", path.display());
            Ok(VendorConfig::default())
        }
        Err(err) => Err(AppError::path_io("Failed to read", path, err)),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<VendorConfig, AppError> {
    let config: VendorConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
