use std::fs;
use std::path::Path;

use crate::domain::release::{PCRE2_SOURCES, templates};

/// Populate `dir` with a minimal PCRE2 `src/` layout.
///
/// Every allowlisted source starts with `/* <name> */` so patched output can
/// be checked against its original first line.
pub fn write_release_sources(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(templates::CONFIG_H_GENERIC), "/* config.h.generic */\n").unwrap();
    fs::write(dir.join(templates::PCRE2_H_GENERIC), "/* pcre2.h.generic */\n").unwrap();
    fs::write(dir.join(templates::CHARTABLES_DIST), "/* chartables */\nconst int t[1];\n").unwrap();
    fs::write(dir.join("pcre2_internal.h"), "/* internal */\n").unwrap();
    for name in PCRE2_SOURCES {
        fs::write(dir.join(name), format!("/* {} */\n", name)).unwrap();
    }
}
