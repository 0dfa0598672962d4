use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{CommandRunner, Downloader};
use crate::services::{archive, filesystem};

/// Result of fetching the release tarball.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    /// Downloaded tarball.
    pub archive: PathBuf,
    /// Top-level directory of the extracted release.
    pub release_root: PathBuf,
}

/// Download the configured release into the staging directory and extract it.
pub fn execute<D, R>(ctx: &AppContext<D, R>) -> Result<FetchOutcome, AppError>
where
    D: Downloader,
    R: CommandRunner,
{
    ctx.config().validate()?;
    let release_config = &ctx.config().release;
    let release = release_config.release();
    let staging = ctx.resolve(&ctx.config().prepare.staging_dir);
    filesystem::create_dir_all(&staging)?;

    let archive_path = release.archive_path(&staging);
    ctx.downloader().download(&release_config.download_url(), &archive_path)?;
    if let Some(expected) = &release_config.sha256 {
        archive::verify_sha256(&archive_path, expected)?;
    }
    archive::extract_tar_bz2(&archive_path, &staging)?;

    Ok(FetchOutcome { archive: archive_path, release_root: release.root(&staging) })
}
