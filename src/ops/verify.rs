use crate::error::{FixError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reports whether the file at `path` still contains `marker`.
pub fn contains_marker(path: &Path, marker: &str) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.contains(marker))
}

/// Read-only second pass: every candidate that still contains `marker`,
/// in candidate order.
pub fn find_stragglers(files: &[PathBuf], marker: &str) -> Result<Vec<PathBuf>> {
    let mut remaining = Vec::new();

    for path in files {
        if contains_marker(path, marker)? {
            log::debug!("Straggler: {}", path.display());
            remaining.push(path.clone());
        }
    }

    Ok(remaining)
}
