//! Conversion of a concrete component directory into a template tree.
//!
//! The run is linear: validate the source, scan it, derive the component
//! name from the first PascalCase source file, then transform every entry
//! one at a time. The first error aborts the run; files written before it
//! are left in place.

use log::{debug, info, warn};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::ignore::{is_ignored, parse_ignore_file};
use crate::placeholder::PlaceholderScheme;
use crate::scanner::{scan_directory, DirectoryEntry};
use crate::substitute::{rename_for_template, substitute_content};
use crate::variants::{check_pascal_case, VariantSet};

/// Base name of the file the component name is taken from.
static CANONICAL_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z0-9]*\.(tsx?|jsx?)$").expect("canonical file pattern is valid")
});

/// Returns true if `file_name` is a PascalCase `.ts`, `.tsx`, `.js` or `.jsx` file.
pub fn is_canonical_file(file_name: &str) -> bool {
    CANONICAL_FILE.is_match(file_name)
}

/// Finds the component name among scanned entries.
///
/// The first file (in scan order) whose base name is canonical wins; the
/// name is everything before its first `.`.
pub fn find_canonical_name(entries: &[DirectoryEntry]) -> Option<String> {
    entries
        .iter()
        .filter(|entry| !entry.is_directory)
        .find(|entry| is_canonical_file(&entry.name))
        .and_then(|entry| entry.name.split('.').next())
        .map(str::to_string)
}

/// Summary of a finished conversion.
#[derive(Debug, Serialize)]
pub struct ConversionReport {
    pub component_name: String,
    pub variants: VariantSet,
    pub scheme: PlaceholderScheme,
    pub output_dir: PathBuf,
    pub directories_created: usize,
    pub files_written: usize,
    pub entries_ignored: usize,
}

/// Drives a conversion with a fixed placeholder scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    scheme: PlaceholderScheme,
}

impl Converter {
    pub fn new(scheme: PlaceholderScheme) -> Self {
        Self { scheme }
    }

    /// Converts `source_dir` into a template tree under `output_dir`.
    ///
    /// # Arguments
    /// * `source_dir` - Directory containing the concrete component; never modified
    /// * `output_dir` - Destination root, created with any missing parents
    ///
    /// # Returns
    /// * `Result<ConversionReport>` - What was derived and written
    ///
    /// # Errors
    /// * `Error::InvalidSourceError` if `source_dir` is missing or not a directory
    /// * `Error::NoCanonicalFileError` if no PascalCase component file exists
    /// * `Error::IgnoreError` if `.dtpignore` holds an invalid pattern
    /// * `Error::IoError` for any filesystem failure while scanning or writing
    ///
    /// Existing files at the destination are overwritten. Files that are not
    /// valid UTF-8 are renamed but their bytes are copied unchanged. A
    /// `.dtpignore` at the source root is never copied, even when it holds
    /// no patterns.
    pub fn convert<S: AsRef<Path>, O: AsRef<Path>>(
        &self,
        source_dir: S,
        output_dir: O,
    ) -> Result<ConversionReport> {
        let source_dir = source_dir.as_ref();
        let output_dir = output_dir.as_ref();

        if !source_dir.is_dir() {
            return Err(Error::InvalidSourceError {
                source_dir: source_dir.display().to_string(),
            });
        }

        fs::create_dir_all(output_dir)?;

        let ignored = parse_ignore_file(source_dir)?;
        let (entries, skipped): (Vec<DirectoryEntry>, Vec<DirectoryEntry>) =
            scan_directory(source_dir)?
                .into_iter()
                .partition(|entry| !is_ignored(&ignored, entry.relative_to(source_dir)));
        for entry in &skipped {
            debug!("Skipping {} from ignore file", entry.path.display());
        }
        debug!("Scanned {} entries in {}", entries.len(), source_dir.display());

        let component_name = find_canonical_name(&entries).ok_or_else(|| {
            Error::NoCanonicalFileError { source_dir: source_dir.display().to_string() }
        })?;
        check_pascal_case(&component_name);
        let variants = VariantSet::derive(&component_name);
        info!(
            "Using component name '{}' ({}, {}, {})",
            variants.pascal, variants.camel, variants.kebab, variants.snake
        );

        let mut report = ConversionReport {
            component_name,
            variants,
            scheme: self.scheme,
            output_dir: output_dir.to_path_buf(),
            directories_created: 0,
            files_written: 0,
            entries_ignored: skipped.len(),
        };

        for entry in &entries {
            let relative_path = entry.relative_to(source_dir);
            if entry.is_directory {
                let target = output_dir.join(relative_path);
                debug!("Creating directory: {}", target.display());
                fs::create_dir_all(&target)?;
                report.directories_created += 1;
            } else {
                let target =
                    self.transform_file(entry, relative_path, output_dir, &report.variants)?;
                debug!("Wrote template: {}", target.display());
                report.files_written += 1;
            }
        }

        info!(
            "Converted {} files and {} directories into {}",
            report.files_written,
            report.directories_created,
            output_dir.display()
        );

        Ok(report)
    }

    fn transform_file(
        &self,
        entry: &DirectoryEntry,
        relative_path: &Path,
        output_dir: &Path,
        variants: &VariantSet,
    ) -> Result<PathBuf> {
        let bytes = fs::read(&entry.path)?;
        let file_name = rename_for_template(&entry.name, variants, self.scheme);

        let target_dir = match relative_path.parent() {
            Some(parent) => output_dir.join(parent),
            None => output_dir.to_path_buf(),
        };
        fs::create_dir_all(&target_dir)?;

        let target = target_dir.join(file_name);
        match String::from_utf8(bytes) {
            Ok(content) => {
                fs::write(&target, substitute_content(&content, variants, self.scheme))?;
            }
            Err(e) => {
                warn!("{} is not valid UTF-8, copying it unchanged", entry.path.display());
                fs::write(&target, e.into_bytes())?;
            }
        }
        Ok(target)
    }
}

/// Converts `source_dir` with the default scheme.
pub fn convert_to_template<S: AsRef<Path>, O: AsRef<Path>>(
    source_dir: S,
    output_dir: O,
) -> Result<ConversionReport> {
    Converter::default().convert(source_dir, output_dir)
}
