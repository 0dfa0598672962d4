//! Filesystem helpers shared by the prepare and publish commands.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;

pub fn read(path: &Path) -> Result<Vec<u8>, AppError> {
    fs::read(path).map_err(|e| AppError::path_io("Failed to read", path, e))
}

pub fn read_to_string(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|e| AppError::path_io("Failed to read", path, e))
}

pub fn write(path: &Path, content: impl AsRef<[u8]>) -> Result<(), AppError> {
    log::debug!("writing {}", path.display());
    fs::write(path, content).map_err(|e| AppError::path_io("Failed to write", path, e))
}

pub fn copy_file(from: &Path, to: &Path) -> Result<(), AppError> {
    log::debug!("copying {} -> {}", from.display(), to.display());
    fs::copy(from, to).map_err(|e| AppError::path_io("Failed to copy", from, e))?;
    Ok(())
}

pub fn create_dir_all(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|e| AppError::path_io("Failed to create", path, e))
}

/// Remove `path` and everything below it; a missing directory is not an error.
pub fn remove_dir_if_exists(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        log::debug!("removing {}", path.display());
        fs::remove_dir_all(path).map_err(|e| AppError::path_io("Failed to remove", path, e))?;
    }
    Ok(())
}

pub fn remove_file(path: &Path) -> Result<(), AppError> {
    log::debug!("removing {}", path.display());
    fs::remove_file(path).map_err(|e| AppError::path_io("Failed to remove", path, e))
}

/// Files directly inside `dir` (non-recursive) with the given extension, sorted by name.
pub fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    let walker =
        WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| walk_error(dir, e))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Copy the tree rooted at `from` to `to`, creating `to` and any subdirectories.
pub fn copy_tree(from: &Path, to: &Path) -> Result<(), AppError> {
    log::debug!("copying tree {} -> {}", from.display(), to.display());
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(from, e))?;
        let relative = entry.path().strip_prefix(from).map_err(|_| {
            AppError::config_error(format!(
                "{} escaped {}",
                entry.path().display(),
                from.display()
            ))
        })?;
        let dest = to.join(relative);
        if entry.file_type().is_dir() {
            create_dir_all(&dest)?;
        } else {
            fs::copy(entry.path(), &dest)
                .map_err(|e| AppError::path_io("Failed to copy", entry.path(), e))?;
        }
    }
    Ok(())
}

/// Delete every file below `root` whose name ends with one of `suffixes`.
///
/// Returns the removed paths.
pub fn remove_files_with_suffixes(
    root: &Path,
    suffixes: &[String],
) -> Result<Vec<PathBuf>, AppError> {
    let mut matched = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())) {
            matched.push(entry.into_path());
        }
    }
    for path in &matched {
        remove_file(path)?;
    }
    Ok(matched)
}

fn walk_error(root: &Path, err: walkdir::Error) -> AppError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => AppError::path_io("Failed to traverse", &path, source),
        None => AppError::config_error(format!("Filesystem loop detected at {}", path.display())),
    }
}
