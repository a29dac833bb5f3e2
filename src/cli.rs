//! Command-line interface implementation for dtp.
//! Provides argument parsing and usage text using clap.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::placeholder::PlaceholderScheme;

/// Two-line usage text printed for any incomplete invocation.
pub const USAGE: &str = "Usage: dtp <source-directory> <output-directory>
       dtp --starter[-<template>] <output-directory>";

/// Command-line arguments structure for dtp.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "dtp: turn a component directory into a scaffolding template",
    long_about = None
)]
pub struct Args {
    /// Directory holding the component (the template with --expand,
    /// or the output directory with --starter)
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory where the template will be written
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Placeholder scheme used for tokens and the file suffix
    #[arg(long, value_enum, default_value_t)]
    pub scheme: PlaceholderScheme,

    /// Expand SOURCE_DIR as a template for the given component name
    #[arg(long, value_name = "NAME", conflicts_with_all = ["starter", "starter_template"])]
    pub expand: Option<String>,

    /// Bootstrap a bundled starter template, choosing interactively
    #[arg(long)]
    pub starter: bool,

    /// Bootstrap the bundled starter template with this key
    #[arg(long, value_name = "KEY", conflicts_with = "starter")]
    pub starter_template: Option<String>,

    /// Print the conversion report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Convert { source_dir: PathBuf, output_dir: PathBuf },
    Expand { name: String, template_dir: PathBuf, output_dir: PathBuf },
    Starter { key: Option<String>, output_dir: PathBuf },
}

impl Args {
    /// Resolves the invocation shape, or `None` if positionals are missing
    /// or surplus for it.
    pub fn action(&self) -> Option<Action> {
        let source_dir = self.source_dir.clone();
        let output_dir = self.output_dir.clone();

        if self.starter || self.starter_template.is_some() {
            return match (source_dir, output_dir) {
                (Some(output_dir), None) => {
                    Some(Action::Starter { key: self.starter_template.clone(), output_dir })
                }
                _ => None,
            };
        }

        let (source_dir, output_dir) = (source_dir?, output_dir?);
        match &self.expand {
            Some(name) => {
                Some(Action::Expand { name: name.clone(), template_dir: source_dir, output_dir })
            }
            None => Some(Action::Convert { source_dir, output_dir }),
        }
    }
}

/// Rewrites `--starter-<key>` into `--starter-template <key>`.
pub fn expand_starter_shorthand<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expanded = Vec::new();
    for arg in args {
        let arg: OsString = arg.into();
        let shorthand = arg
            .to_str()
            .and_then(|s| s.strip_prefix("--starter-"))
            .filter(|key| !key.is_empty() && *key != "template" && !key.starts_with("template="))
            .map(str::to_string);

        match shorthand {
            Some(key) => {
                expanded.push(OsString::from("--starter-template"));
                expanded.push(OsString::from(key));
            }
            None => expanded.push(arg),
        }
    }
    expanded
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for malformed arguments
pub fn get_args() -> Args {
    match Args::try_parse_from(expand_starter_shorthand(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}

/// Prints the usage text to stdout.
pub fn print_usage() {
    println!("{USAGE}");
}
