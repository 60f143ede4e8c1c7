//! Directory listing for the board and app trees.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

/// Two-level tree: top-level directory name to the directory names below it.
/// Iteration order is the order the generators emit in.
pub type Hierarchy = IndexMap<String, Vec<String>>;

/// Returns the names of the immediate subdirectories of `path`, sorted by name.
///
/// Regular files and anything that does not resolve to a directory are skipped.
///
/// # Errors
/// * `Error::ListError` if `path` is missing or cannot be read
/// * `Error::NotADirectory` if `path` is not a directory
/// * `Error::InvalidName` if a directory name is not valid UTF-8
pub fn list_subdirectories<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!("Listing subdirectories of {}", path.display());

    // WalkDir yields nothing below a regular file instead of failing.
    if path.exists() && !path.is_dir() {
        return Err(Error::NotADirectory(path.display().to_string()));
    }

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    let mut names = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::ListError {
            path: path.display().to_string(),
            source,
        })?;
        // Follows symlinks, so a link to a directory counts and a dangling one does not.
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| Error::InvalidName(entry.path().display().to_string()))?;
        names.push(name.to_string());
    }

    Ok(names)
}

/// Lists `root` and every directory below it, building the two-level mapping.
pub fn scan_hierarchy<P: AsRef<Path>>(root: P) -> Result<Hierarchy> {
    let root = root.as_ref();
    let mut hierarchy = Hierarchy::new();
    for group in list_subdirectories(root)? {
        let members = list_subdirectories(root.join(&group))?;
        debug!("{}: {} entries under '{}'", root.display(), members.len(), group);
        hierarchy.insert(group, members);
    }
    Ok(hierarchy)
}
