//! Expansion of a template tree back into a concrete component.
//!
//! This is the inverse of [`crate::converter::Converter::convert`]: every
//! file carrying the scheme suffix has the suffix stripped and its tokens
//! replaced with the variants of the requested name, in both its content
//! and its filename. Files without the suffix are copied as they are.

use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::placeholder::PlaceholderScheme;
use crate::scanner::scan_directory;
use crate::substitute::{restore_content, restore_file_name};
use crate::variants::{check_pascal_case, VariantSet};

/// Checks that `name` can anchor the case variants.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidNameError { name: name.to_string() });
    }
    Ok(())
}

/// Renders `template_dir` for component `name` into `output_dir`.
///
/// # Errors
/// * `Error::InvalidNameError` if `name` is empty or not alphanumeric
/// * `Error::InvalidSourceError` if `template_dir` is not a directory
/// * `Error::IoError` for any filesystem failure
///
/// Returns the number of files written.
pub fn expand_template<T: AsRef<Path>, O: AsRef<Path>>(
    template_dir: T,
    name: &str,
    output_dir: O,
    scheme: PlaceholderScheme,
) -> Result<usize> {
    let template_dir = template_dir.as_ref();
    let output_dir = output_dir.as_ref();

    validate_name(name)?;
    if !template_dir.is_dir() {
        return Err(Error::InvalidSourceError {
            source_dir: template_dir.display().to_string(),
        });
    }
    check_pascal_case(name);

    let variants = VariantSet::derive(name);
    fs::create_dir_all(output_dir)?;

    let mut files_written = 0;
    for entry in scan_directory(template_dir)? {
        let relative_path = entry.relative_to(template_dir);

        if entry.is_directory {
            fs::create_dir_all(output_dir.join(relative_path))?;
            continue;
        }

        let target_dir = match relative_path.parent() {
            Some(parent) => output_dir.join(parent),
            None => output_dir.to_path_buf(),
        };
        fs::create_dir_all(&target_dir)?;

        if entry.name.ends_with(scheme.suffix()) {
            let target = target_dir.join(restore_file_name(&entry.name, &variants, scheme));
            debug!("Rendering file: {}", target.display());
            match String::from_utf8(fs::read(&entry.path)?) {
                Ok(content) => fs::write(&target, restore_content(&content, &variants, scheme))?,
                Err(e) => {
                    warn!("{} is not valid UTF-8, copying it unchanged", entry.path.display());
                    fs::write(&target, e.into_bytes())?;
                }
            }
        } else {
            let target = target_dir.join(&entry.name);
            debug!("Copying file: {}", target.display());
            fs::copy(&entry.path, &target)?;
        }
        files_written += 1;
    }

    info!("Expanded {} files for '{}' into {}", files_written, name, output_dir.display());
    Ok(files_written)
}
