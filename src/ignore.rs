//! File and directory ignore pattern handling.
//! This module processes the .dtpignore file at the root of a source tree
//! to exclude specific paths from conversion, similar to .gitignore.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Name of the ignore file looked up at the source root.
pub const IGNORE_FILE: &str = ".dtpignore";

/// Reads `<source_dir>/.dtpignore` and compiles its patterns.
///
/// # Arguments
/// * `source_dir` - Root of the tree being converted
///
/// # Returns
/// * `Result<GlobSet>` - Compiled patterns, matched against paths relative to `source_dir`
///
/// # Notes
/// - A missing ignore file yields an empty set, so nothing is skipped
/// - Blank lines and lines starting with `#` are skipped
/// - A trailing `/` is dropped, so `node_modules/` matches the directory itself
/// - Invalid patterns result in an `Error::IgnoreError`
///
/// # Example
/// ```ignore
/// # Contents of .dtpignore:
/// *.snap
/// node_modules/
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(source_dir: P) -> Result<GlobSet> {
    let ignore_path = source_dir.as_ref().join(IGNORE_FILE);
    let mut builder = GlobSetBuilder::new();

    if ignore_path.is_file() {
        let contents = std::fs::read_to_string(&ignore_path)?;
        for line in contents.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern = line.trim_end_matches('/');
            builder.add(Glob::new(pattern).map_err(|e| {
                Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}"))
            })?);
        }
    } else {
        debug!("{IGNORE_FILE} does not exist");
    }

    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{IGNORE_FILE} loading failed: {e}")))
}

/// Returns true when `relative_path`, or any directory above it, matches.
pub fn is_ignored(patterns: &GlobSet, relative_path: &Path) -> bool {
    if relative_path == Path::new(IGNORE_FILE) {
        return true;
    }
    relative_path.ancestors().any(|p| !p.as_os_str().is_empty() && patterns.is_match(p))
}
