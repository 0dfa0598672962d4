//! Release archive handling.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use bzip2::read::BzDecoder;
use sha2::{Digest, Sha256};

use crate::domain::AppError;

/// Expand a `.tar.bz2` archive into `extract_to`, creating it if needed.
pub fn extract_tar_bz2(archive: &Path, extract_to: &Path) -> Result<(), AppError> {
    println!("Extracting {} to {}...", archive.display(), extract_to.display());

    fs::create_dir_all(extract_to)
        .map_err(|e| AppError::path_io("Failed to create", extract_to, e))?;
    let file = File::open(archive).map_err(|e| AppError::path_io("Failed to open", archive, e))?;
    let mut tar = tar::Archive::new(BzDecoder::new(file));
    tar.unpack(extract_to)
        .map_err(|source| AppError::Archive { path: archive.display().to_string(), source })?;

    println!("Extraction complete.");
    Ok(())
}

/// Lowercase hex SHA-256 of a file's contents.
pub fn sha256_file(path: &Path) -> Result<String, AppError> {
    let mut file = File::open(path).map_err(|e| AppError::path_io("Failed to open", path, e))?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher).map_err(|e| AppError::path_io("Failed to read", path, e))?;
    let digest = hasher.finalize();
    Ok(digest.iter().map(|byte| format!("{:02x}", byte)).collect())
}

/// Fail with `ChecksumMismatch` unless `path` hashes to `expected`.
pub fn verify_sha256(path: &Path, expected: &str) -> Result<(), AppError> {
    let actual = sha256_file(path)?;
    if !actual.eq_ignore_ascii_case(expected) {
        return Err(AppError::ChecksumMismatch {
            path: path.display().to_string(),
            expected: expected.to_ascii_lowercase(),
            actual,
        });
    }
    log::debug!("checksum verified for {}", path.display());
    Ok(())
}
