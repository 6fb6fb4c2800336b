//! Candidate file discovery.
//!
//! Walks the whole tree below a root, hidden directories included, and
//! collects every regular file (or link to one) whose name ends with the
//! configured suffix. Nothing is read or written here.

use crate::error::{FixError, Result};
use std::path::{Path, PathBuf};

/// Returns every file under `root` ending in `.{extension}`, in walk order.
///
/// # Errors
///
/// Fails with [`FixError::Discovery`] when `root` is missing or is not a
/// directory. Unreadable entries further down are skipped.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).map_err(|e| FixError::Discovery {
        root: root.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !metadata.is_dir() {
        return Err(FixError::Discovery {
            root: root.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let suffix = format!(".{}", extension);

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("Skipping entry due to error: {}", e);
                continue;
            }
        };

        // Directory links are not descended into, but a link to a file is
        // still a candidate and gets rewritten through the link.
        let is_file = entry
            .file_type()
            .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && entry.path().is_file()));
        if !is_file {
            continue;
        }

        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));

        if matches {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "Discovered {} '{}' files under {}",
        files.len(),
        suffix,
        root.display()
    );

    Ok(files)
}
