pub mod code_unit_width;
pub mod command_line;
pub mod configuration;
pub mod error;
pub mod macros;
pub mod manifest;
pub mod package_descriptor;
pub mod release;

pub use code_unit_width::CodeUnitWidth;
pub use command_line::CommandLine;
pub use configuration::{PrepareConfig, PublishConfig, ReleaseConfig, VendorConfig};
pub use error::AppError;
pub use macros::MacroDefinition;
pub use manifest::IgnoreManifest;
pub use package_descriptor::PackageDescriptor;
pub use release::Pcre2Release;
