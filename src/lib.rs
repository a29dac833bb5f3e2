//! dtp turns a directory holding one concrete UI component into a
//! scaffolding template. The component name is found from its PascalCase
//! source file, and every pascal, camel, kebab and snake rendering of it is
//! replaced with a placeholder token in file contents and filenames.

/// Command-line interface module
pub mod cli;

/// Template conversion orchestration
pub mod converter;

/// Error types and handling
pub mod error;

/// Rendering a template tree back into a concrete component
pub mod expander;

/// File and directory ignore patterns
/// Processes .dtpignore files to exclude specific paths
pub mod ignore;

pub mod logger;

/// Placeholder token schemes
pub mod placeholder;

/// User input and interaction handling
pub mod prompt;

/// Recursive directory listing
pub mod scanner;

/// Bundled starter templates
pub mod starter;

/// Variant to token substitution in contents and filenames
pub mod substitute;

/// Case variant derivation
pub mod variants;

pub use converter::{convert_to_template, ConversionReport, Converter};
pub use placeholder::PlaceholderScheme;
pub use variants::{CaseStyle, VariantSet};
