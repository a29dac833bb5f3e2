//! Recursive enumeration of a source tree.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// One filesystem object visited during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Parent path joined with `name`
    pub path: PathBuf,
    /// Base name of the entry
    pub name: String,
    pub is_directory: bool,
}

impl DirectoryEntry {
    /// Path of the entry relative to the scanned root.
    pub fn relative_to<'a>(&'a self, root: &Path) -> &'a Path {
        self.path.strip_prefix(root).unwrap_or(&self.path)
    }
}

/// Lists every file and directory below `root_dir`, depth-first.
///
/// A directory is always listed before its contents, and siblings are
/// sorted by file name so repeated scans of the same tree agree. The root
/// itself is not part of the listing, so an empty directory yields an
/// empty list.
///
/// # Errors
/// * `Error::IoError` if the root (or any directory below it) cannot be
///   read, or a symlink loop is detected
pub fn scan_directory<P: AsRef<Path>>(root_dir: P) -> Result<Vec<DirectoryEntry>> {
    let root_dir = root_dir.as_ref();
    let mut entries = Vec::new();

    let walker = WalkDir::new(root_dir).min_depth(1).follow_links(true).sort_by_file_name();
    for dir_entry in walker {
        let dir_entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let is_directory = dir_entry.file_type().is_dir();

        let kind = if is_directory { "directory" } else { "file" };
        debug!("Scanned {}: {}", kind, dir_entry.path().display());

        entries.push(DirectoryEntry { path: dir_entry.into_path(), name, is_directory });
    }

    Ok(entries)
}
