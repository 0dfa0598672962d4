//! Upstream PCRE2 release layout.

use std::path::{Path, PathBuf};

/// Release the allowlist below was written against.
pub const DEFAULT_VERSION: &str = "10.47";

/// Library sources compiled into the package, in descriptor order.
///
/// Maintained by hand for PCRE2 10.47. Files that upstream only builds
/// through `#include` (the JIT helpers, `pcre2_ucptables.c`) are absent.
pub const PCRE2_SOURCES: [&str; 30] = [
    "pcre2_auto_possess.c",
    "pcre2_chkdint.c",
    "pcre2_compile.c",
    "pcre2_compile_cgroup.c",
    "pcre2_compile_class.c",
    "pcre2_config.c",
    "pcre2_context.c",
    "pcre2_convert.c",
    "pcre2_dfa_match.c",
    "pcre2_error.c",
    "pcre2_extuni.c",
    "pcre2_find_bracket.c",
    "pcre2_jit_compile.c",
    "pcre2_maketables.c",
    "pcre2_match.c",
    "pcre2_match_data.c",
    "pcre2_match_next.c",
    "pcre2_newline.c",
    "pcre2_ord2utf.c",
    "pcre2_pattern_info.c",
    "pcre2_script_run.c",
    "pcre2_serialize.c",
    "pcre2_string_utils.c",
    "pcre2_study.c",
    "pcre2_substitute.c",
    "pcre2_substring.c",
    "pcre2_tables.c",
    "pcre2_ucd.c",
    "pcre2_valid_utf.c",
    "pcre2_xclass.c",
];

/// Template file names shipped in the release `src/` folder and their vendored names.
pub mod templates {
    pub const CONFIG_H_GENERIC: &str = "config.h.generic";
    pub const CONFIG_H: &str = "config.h";
    pub const PCRE2_H_GENERIC: &str = "pcre2.h.generic";
    pub const PCRE2_H: &str = "pcre2.h";
    pub const CHARTABLES_DIST: &str = "pcre2_chartables.c.dist";
    pub const CHARTABLES: &str = "pcre2_chartables.c";
}

/// A PCRE2 release as laid out inside the staging directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcre2Release {
    version: String,
}

impl Pcre2Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }

    /// `pcre2-<version>`, the top-level directory inside the tarball.
    pub fn dir_name(&self) -> String {
        format!("pcre2-{}", self.version)
    }

    pub fn archive_name(&self) -> String {
        format!("{}.tar.bz2", self.dir_name())
    }

    /// GitHub release download URL for this version.
    pub fn default_url(&self) -> String {
        format!(
            "https://github.com/PCRE2Project/pcre2/releases/download/{dir}/{archive}",
            dir = self.dir_name(),
            archive = self.archive_name()
        )
    }

    pub fn archive_path(&self, staging: &Path) -> PathBuf {
        staging.join(self.archive_name())
    }

    pub fn root(&self, staging: &Path) -> PathBuf {
        staging.join(self.dir_name())
    }

    /// Library source folder of the extracted release.
    pub fn src_dir(&self, staging: &Path) -> PathBuf {
        self.root(staging).join("src")
    }

    /// Bundled third-party dependencies (sljit).
    pub fn deps_dir(&self, staging: &Path) -> PathBuf {
        self.root(staging).join("deps")
    }
}

impl Default for Pcre2Release {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION)
    }
}
