mod common;

use common::{SOURCES, TestContext};
use pcre2_vendor::{CodeUnitWidth, PrepareOptions, prepare_sources};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

fn allowlist() -> Vec<String> {
    SOURCES.iter().map(|s| s.to_string()).collect()
}

fn prepare(source: &Path, target: &Path) {
    let sources = allowlist();
    prepare_sources(&PrepareOptions {
        source,
        target,
        code_unit_width: CodeUnitWidth::Sixteen,
        sources: &sources,
    })
    .expect("prepare should succeed");
}

#[test]
fn fixture_release_produces_complete_package_source() {
    let ctx = TestContext::new();
    let source = ctx.write_release_sources("prepare/pcre2-10.47/src");
    let target = ctx.path("src");

    prepare(&source, &target);

    let mut expected: Vec<String> = vec![
        "config.h".into(),
        "pcre2.h".into(),
        "pcre2_chartables.c".into(),
        "pcre2_internal.h".into(),
        "pcre2_intmodedep.h".into(),
    ];
    expected.extend(allowlist());
    expected.sort();

    let ignore = ctx.read("src/.gitignore");
    let listed: Vec<String> = ignore.lines().map(str::to_string).collect();
    assert_eq!(listed, expected);
    assert!(ignore.ends_with('\n'));

    for name in &listed {
        assert!(target.join(name).is_file(), "{} should exist", name);
    }

    let descriptor: Value = serde_json::from_str(&ctx.read("src/moon.pkg.json")).unwrap();
    let mut stub = vec![json!("pcre2.c"), json!("pcre2_chartables.c")];
    stub.extend(SOURCES.iter().map(|s| json!(s)));
    assert_eq!(descriptor, json!({ "native-stub": stub }));
}

#[test]
fn patched_sources_keep_original_first_line() {
    let ctx = TestContext::new();
    let source = ctx.write_release_sources("release/src");

    prepare(&source, &ctx.path("src"));

    for name in SOURCES {
        let content = ctx.read(&format!("src/{}", name));
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("#define PCRE2_CODE_UNIT_WIDTH 16"));
        assert_eq!(lines.next(), Some("#define HAVE_CONFIG_H 1"));
        assert_eq!(lines.next(), Some(format!("/* {} */", name).as_str()));
        assert_eq!(lines.next(), None);
    }
}

#[test]
fn existing_descriptor_keys_survive() {
    let ctx = TestContext::new();
    let source = ctx.write_release_sources("release/src");
    ctx.write(
        "src/moon.pkg.json",
        r#"{
  "import": ["moonbitlang/core/builtin"],
  "native-stub": ["removed.c"],
  "link": { "native": { "cc-flags": "-DPCRE2_STATIC" } }
}"#,
    );

    prepare(&source, &ctx.path("src"));

    let descriptor: Value = serde_json::from_str(&ctx.read("src/moon.pkg.json")).unwrap();
    let object = descriptor.as_object().unwrap();
    let keys: Vec<&String> = object.keys().collect();
    assert_eq!(keys, ["import", "native-stub", "link"]);
    assert_eq!(descriptor["import"], json!(["moonbitlang/core/builtin"]));
    assert_eq!(descriptor["link"], json!({ "native": { "cc-flags": "-DPCRE2_STATIC" } }));
    assert_eq!(descriptor["native-stub"].as_array().unwrap().len(), 32);
}

#[test]
fn second_run_is_byte_identical() {
    let ctx = TestContext::new();
    let source = ctx.write_release_sources("release/src");
    let target = ctx.path("src");

    let snapshot = || {
        let mut files: Vec<(String, Vec<u8>)> = fs::read_dir(&target)
            .unwrap()
            .map(|entry| entry.unwrap())
            .map(|entry| {
                (entry.file_name().to_string_lossy().into_owned(), fs::read(entry.path()).unwrap())
            })
            .collect();
        files.sort();
        files
    };

    prepare(&source, &target);
    let first = snapshot();
    prepare(&source, &target);
    assert_eq!(first, snapshot());
}
