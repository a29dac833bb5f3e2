//! Error handling for dtp.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use thiserror::Error as ThisError;

/// Errors that can occur while converting, expanding or bootstrapping templates.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Any failure of a filesystem read, write, directory creation or walk
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The source path is missing or is not a directory
    #[error("Source path must be a directory: '{source_dir}'.")]
    InvalidSourceError { source_dir: String },

    /// No PascalCase component file was found in the source tree
    #[error("Could not find main component file (should be PascalCase) in '{source_dir}'.")]
    NoCanonicalFileError { source_dir: String },

    /// A name given on the command line cannot anchor the case variants
    #[error("Invalid component name '{name}': expected ASCII letters and digits.")]
    InvalidNameError { name: String },

    /// Errors in processing .dtpignore files
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),

    #[error("Starter error: {0}.")]
    StarterError(String),

    /// Errors raised by the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),

    #[error("Report error: {0}.")]
    ReportError(#[from] serde_json::Error),
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
