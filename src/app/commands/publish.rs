//! Staging, validation and publication of the vendored package.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, IgnoreManifest};
use crate::ports::{CommandRunner, Downloader};
use crate::services::filesystem;

/// Result of a successful publish.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub publish_dir: PathBuf,
    /// Test and interface files removed from the staged sources.
    pub stripped: Vec<PathBuf>,
}

/// Stage the package, run its tests, strip test artifacts and publish.
///
/// A failing test command aborts before anything is published.
pub fn execute<D, R>(ctx: &AppContext<D, R>) -> Result<PublishOutcome, AppError>
where
    D: Downloader,
    R: CommandRunner,
{
    ctx.config().validate()?;
    let publish = &ctx.config().publish;
    let prepare = &ctx.config().prepare;
    let publish_dir = ctx.resolve(&publish.publish_dir);

    filesystem::remove_dir_if_exists(&publish_dir)?;
    filesystem::create_dir_all(&publish_dir)?;

    for file in &publish.files {
        filesystem::copy_file(&ctx.root().join(file), &publish_dir.join(file))?;
    }
    let staged_src = publish_dir.join(&prepare.source_dir);
    filesystem::copy_tree(&ctx.resolve(&prepare.source_dir), &staged_src)?;
    filesystem::copy_tree(&ctx.resolve(&prepare.deps_dir), &publish_dir.join(&prepare.deps_dir))?;
    filesystem::remove_file(&staged_src.join(IgnoreManifest::FILE_NAME))?;

    println!("Running {}...", publish.test_command);
    ctx.runner().run(&publish.test_command, &publish_dir)?;

    let stripped = filesystem::remove_files_with_suffixes(&staged_src, &publish.strip_suffixes)?;
    log::info!("stripped {} test and interface files", stripped.len());

    println!("Running {}...", publish.publish_command);
    ctx.runner().run(&publish.publish_command, &publish_dir)?;

    Ok(PublishOutcome { publish_dir, stripped })
}
