//! Vendoring configuration domain models.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::release::{DEFAULT_VERSION, PCRE2_SOURCES};
use crate::domain::{AppError, CodeUnitWidth, CommandLine, Pcre2Release};

/// Configuration loaded from `vendor.toml`; every field has a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorConfig {
    /// Upstream release to fetch.
    #[serde(default)]
    pub release: ReleaseConfig,
    /// Source preparation settings.
    #[serde(default)]
    pub prepare: PrepareConfig,
    /// Publish staging settings.
    #[serde(default)]
    pub publish: PublishConfig,
}

impl VendorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.release.validate()?;
        self.prepare.validate()?;
        self.publish.validate()?;

        let dirs = [
            ("prepare.staging_dir", &self.prepare.staging_dir),
            ("prepare.source_dir", &self.prepare.source_dir),
            ("prepare.deps_dir", &self.prepare.deps_dir),
            ("publish.publish_dir", &self.publish.publish_dir),
        ];
        for (i, (key, dir)) in dirs.iter().enumerate() {
            for (other_key, other) in &dirs[i + 1..] {
                if dir.starts_with(other) || other.starts_with(dir) {
                    return Err(AppError::config_error(format!(
                        "{} ('{}') and {} ('{}') must not overlap",
                        key,
                        dir.display(),
                        other_key,
                        other.display()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Directories are resolved against the project root and may be removed
/// wholesale, so only plain nested names are accepted.
fn validate_relative_dir(key: &str, dir: &Path) -> Result<(), AppError> {
    let mut components = dir.components().peekable();
    let plain = components.peek().is_some()
        && components.all(|component| matches!(component, Component::Normal(_)));
    if !plain {
        return Err(AppError::config_error(format!(
            "{} must be a relative path below the project root without '.' or '..', got '{}'",
            key,
            dir.display()
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseConfig {
    /// PCRE2 version, e.g. `10.47`.
    #[serde(default = "default_version")]
    pub version: String,
    /// Explicit tarball URL; derived from the version when absent.
    #[serde(default)]
    pub url: Option<Url>,
    /// Expected SHA-256 of the tarball, lowercase hex.
    #[serde(default)]
    pub sha256: Option<String>,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self { version: default_version(), url: None, sha256: None }
    }
}

impl ReleaseConfig {
    pub fn release(&self) -> Pcre2Release {
        Pcre2Release::new(self.version.clone())
    }

    pub fn download_url(&self) -> String {
        match &self.url {
            Some(url) => url.to_string(),
            None => self.release().default_url(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.version.trim().is_empty() {
            return Err(AppError::config_error("release.version must not be empty"));
        }
        if let Some(digest) = &self.sha256 {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(AppError::config_error(format!(
                    "release.sha256 must be 64 hex characters, got '{}'",
                    digest
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrepareConfig {
    #[serde(default)]
    pub code_unit_width: CodeUnitWidth,
    /// Where the tarball is downloaded and extracted.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: PathBuf,
    /// Package source directory receiving the vendored files.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Destination of the release's bundled dependencies.
    #[serde(default = "default_deps_dir")]
    pub deps_dir: PathBuf,
    /// Library sources to vendor, in descriptor order.
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            code_unit_width: CodeUnitWidth::default(),
            staging_dir: default_staging_dir(),
            source_dir: default_source_dir(),
            deps_dir: default_deps_dir(),
            sources: default_sources(),
        }
    }
}

impl PrepareConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_relative_dir("prepare.staging_dir", &self.staging_dir)?;
        validate_relative_dir("prepare.source_dir", &self.source_dir)?;
        validate_relative_dir("prepare.deps_dir", &self.deps_dir)?;
        if self.sources.is_empty() {
            return Err(AppError::config_error("prepare.sources must not be empty"));
        }
        if let Some(bad) = self.sources.iter().find(|s| s.contains('/') || s.contains('\\')) {
            return Err(AppError::config_error(format!(
                "prepare.sources entries must be plain file names, got '{}'",
                bad
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishConfig {
    /// Staging directory recreated on every publish.
    #[serde(default = "default_publish_dir")]
    pub publish_dir: PathBuf,
    /// Top-level files copied into the staging directory.
    #[serde(default = "default_publish_files")]
    pub files: Vec<String>,
    #[serde(default = "default_test_command")]
    pub test_command: CommandLine,
    #[serde(default = "default_publish_command")]
    pub publish_command: CommandLine,
    /// File name suffixes stripped from the staged sources after testing.
    #[serde(default = "default_strip_suffixes")]
    pub strip_suffixes: Vec<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            publish_dir: default_publish_dir(),
            files: default_publish_files(),
            test_command: default_test_command(),
            publish_command: default_publish_command(),
            strip_suffixes: default_strip_suffixes(),
        }
    }
}

impl PublishConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_relative_dir("publish.publish_dir", &self.publish_dir)?;
        for file in &self.files {
            validate_relative_dir("publish.files", Path::new(file))?;
        }
        if self.strip_suffixes.iter().any(|s| s.is_empty()) {
            return Err(AppError::config_error("publish.strip_suffixes must not contain ''"));
        }
        Ok(())
    }
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_staging_dir() -> PathBuf {
    PathBuf::from("prepare")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src")
}

fn default_deps_dir() -> PathBuf {
    PathBuf::from("deps")
}

fn default_sources() -> Vec<String> {
    PCRE2_SOURCES.iter().map(|s| s.to_string()).collect()
}

fn default_publish_dir() -> PathBuf {
    PathBuf::from("publish")
}

fn default_publish_files() -> Vec<String> {
    vec!["moon.mod.json".to_string(), "README.md".to_string(), "LICENSE".to_string()]
}

fn default_test_command() -> CommandLine {
    CommandLine::new("moon", ["test", "--target", "native"])
}

fn default_publish_command() -> CommandLine {
    CommandLine::new("moon", ["publish"])
}

fn default_strip_suffixes() -> Vec<String> {
    vec!["_test.mbt".to_string(), ".mbti".to_string()]
}
