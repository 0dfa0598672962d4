//! Shared testing utilities for pcre2-vendor CLI tests.

use assert_cmd::Command;
use bzip2::Compression;
use bzip2::write::BzEncoder;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use pcre2_vendor::domain::release::PCRE2_SOURCES as SOURCES;

/// Testing harness providing an isolated project directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Project directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("pcre2-vendor").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env("RUST_LOG", "off");
        cmd
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
    }

    /// Write `vendor.toml` in the project root.
    pub fn write_config(&self, content: &str) {
        self.write("vendor.toml", content);
    }

    /// Lay out a minimal extracted release `src/` folder at `relative`.
    pub fn write_release_sources(&self, relative: &str) -> PathBuf {
        for (name, content) in release_entries("") {
            self.write(&format!("{}/{}", relative, name), &content);
        }
        self.path(relative)
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

/// Files of a stub release `src/` folder, each prefixed with `prefix`.
pub fn release_entries(prefix: &str) -> Vec<(String, String)> {
    let mut entries = vec![
        (format!("{prefix}config.h.generic"), "/* config.h.generic */\n".to_string()),
        (format!("{prefix}pcre2.h.generic"), "/* pcre2.h.generic */\n".to_string()),
        (format!("{prefix}pcre2_chartables.c.dist"), "/* chartables */\n".to_string()),
        (format!("{prefix}pcre2_internal.h"), "/* internal */\n".to_string()),
        (format!("{prefix}pcre2_intmodedep.h"), "/* intmodedep */\n".to_string()),
    ];
    for name in SOURCES {
        entries.push((format!("{prefix}{name}"), format!("/* {name} */\n")));
    }
    entries
}

/// Build a `pcre2-<version>.tar.bz2` holding a stub release with `src/` and `deps/`.
pub fn release_tarball(version: &str) -> Vec<u8> {
    let top = format!("pcre2-{version}");
    let mut entries = release_entries(&format!("{top}/src/"));
    entries.push((format!("{top}/deps/sljit/sljit_src/sljitLir.c"), "/* sljit */\n".to_string()));

    let mut builder = tar::Builder::new(BzEncoder::new(Vec::new(), Compression::fast()));
    for (name, content) in &entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, content.as_bytes()).expect("append entry");
    }
    builder.into_inner().expect("finish tar").finish().expect("finish bzip2")
}
