//! Vendoring of the PCRE2 library sources into the package source directory.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::commands::fetch;
use crate::domain::macros::{self, MacroDefinition};
use crate::domain::release::templates;
use crate::domain::{AppError, CodeUnitWidth, IgnoreManifest, PackageDescriptor};
use crate::ports::{CommandRunner, Downloader};
use crate::services::filesystem;

/// Inputs of a single source preparation.
#[derive(Debug, Clone, Copy)]
pub struct PrepareOptions<'a> {
    /// The extracted release's `src/` folder.
    pub source: &'a Path,
    /// Package directory receiving the vendored files.
    pub target: &'a Path,
    pub code_unit_width: CodeUnitWidth,
    /// Allowlisted library sources, in descriptor order.
    pub sources: &'a [String],
}

/// What a preparation wrote.
#[derive(Debug, Clone)]
pub struct PrepareOutcome {
    pub target: PathBuf,
    pub manifest: IgnoreManifest,
}

/// Result of the full fetch, prepare and dependency sync sequence.
#[derive(Debug, Clone)]
pub struct VendorOutcome {
    pub fetch: fetch::FetchOutcome,
    pub prepare: PrepareOutcome,
    pub deps_dir: PathBuf,
}

/// Fetch the configured release, vendor its sources and replace the deps tree.
pub fn execute<D, R>(ctx: &AppContext<D, R>) -> Result<VendorOutcome, AppError>
where
    D: Downloader,
    R: CommandRunner,
{
    let fetched = fetch::execute(ctx)?;

    let prepare_config = &ctx.config().prepare;
    let release = ctx.config().release.release();
    let staging = ctx.resolve(&prepare_config.staging_dir);
    let source = release.src_dir(&staging);
    let target = ctx.resolve(&prepare_config.source_dir);
    let prepared = prepare_sources(&PrepareOptions {
        source: &source,
        target: &target,
        code_unit_width: prepare_config.code_unit_width,
        sources: &prepare_config.sources,
    })?;

    let deps_dir = ctx.resolve(&prepare_config.deps_dir);
    sync_deps(&release.deps_dir(&staging), &deps_dir)?;

    Ok(VendorOutcome { fetch: fetched, prepare: prepared, deps_dir })
}

/// Rewrite `options.target` from the pristine release sources.
pub fn prepare_sources(options: &PrepareOptions<'_>) -> Result<PrepareOutcome, AppError> {
    let PrepareOptions { source, target, code_unit_width, sources } = *options;
    filesystem::create_dir_all(target)?;
    let mut manifest = IgnoreManifest::new();

    let config_template =
        filesystem::read_to_string(&require(source, templates::CONFIG_H_GENERIC)?)?;
    filesystem::write(
        &target.join(templates::CONFIG_H),
        macros::render_config_header(&config_template, code_unit_width),
    )?;
    manifest.record(templates::CONFIG_H);

    filesystem::copy_file(
        &require(source, templates::PCRE2_H_GENERIC)?,
        &target.join(templates::PCRE2_H),
    )?;
    manifest.record(templates::PCRE2_H);

    let unit_macros = macros::translation_unit_macros(code_unit_width);
    copy_with_macros(
        &require(source, templates::CHARTABLES_DIST)?,
        &target.join(templates::CHARTABLES),
        &unit_macros,
    )?;
    manifest.record(templates::CHARTABLES);

    for header in filesystem::list_files_with_extension(source, "h")? {
        let name = file_name(&header)?;
        let dest = target.join(&name);
        println!("COPY {} -> {}", header.display(), dest.display());
        filesystem::copy_file(&header, &dest)?;
        manifest.record(name);
    }

    for name in sources {
        let from = require(source, name)?;
        let dest = target.join(name);
        println!("COPY {} -> {}", from.display(), dest.display());
        copy_with_macros(&from, &dest, &unit_macros)?;
        manifest.record(name.as_str());
    }

    update_descriptor(target, sources)?;

    filesystem::write(&target.join(IgnoreManifest::FILE_NAME), manifest.render())?;
    log::info!("vendored {} files into {}", manifest.len(), target.display());

    Ok(PrepareOutcome { target: target.to_path_buf(), manifest })
}

/// Copy `from` to `to`, then prepend `macros` to the copy.
pub fn copy_with_macros(
    from: &Path,
    to: &Path,
    macros: &[MacroDefinition],
) -> Result<(), AppError> {
    let content = filesystem::read(from)?;
    filesystem::write(to, macros::prepend_macros(&content, macros))
}

/// Set the native stub list in the target's descriptor, creating it if absent.
pub fn update_descriptor(target: &Path, sources: &[String]) -> Result<(), AppError> {
    let path = target.join(PackageDescriptor::FILE_NAME);
    let mut descriptor = if path.exists() {
        let content = filesystem::read_to_string(&path)?;
        PackageDescriptor::parse(&content, &path.display().to_string())?
    } else {
        PackageDescriptor::default()
    };
    descriptor.set_native_stub(sources);
    filesystem::write(&path, descriptor.render()?)
}

/// Replace `deps_dir` with a copy of the release's bundled dependencies.
pub fn sync_deps(release_deps: &Path, deps_dir: &Path) -> Result<(), AppError> {
    filesystem::remove_dir_if_exists(deps_dir)?;
    filesystem::copy_tree(release_deps, deps_dir)
}

fn require(dir: &Path, name: &str) -> Result<PathBuf, AppError> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(AppError::SourceFileMissing(path.display().to_string()));
    }
    Ok(path)
}

fn file_name(path: &Path) -> Result<String, AppError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::config_error(format!("Unsupported file name: {}", path.display()))
        })
}
