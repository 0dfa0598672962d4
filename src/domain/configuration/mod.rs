pub mod loader;
pub mod vendor_config;

pub use loader::{CONFIG_FILE, load_config, parse_config_content};
pub use vendor_config::{PrepareConfig, PublishConfig, ReleaseConfig, VendorConfig};
