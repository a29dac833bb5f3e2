//! User input and interaction handling.

use crate::error::{Error, Result};
use dialoguer::Select;

/// Source of interactive answers.
pub trait Prompter {
    /// Asks the user to pick one of `items` and returns its index.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(default)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Prompter that always answers with its default choice.
///
/// Used when stdin is not a terminal.
pub struct DefaultPrompter;

impl Prompter for DefaultPrompter {
    fn select(&self, _prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        if default < items.len() {
            Ok(default)
        } else {
            Err(Error::PromptError(format!("no choice at index {default}")))
        }
    }
}
