//! Placeholder token schemes.
//!
//! A scheme fixes the marker string substituted for each case style and
//! the suffix appended to every generated template file. One scheme is
//! applied to both contents and filenames for the whole run.

use crate::variants::CaseStyle;

/// Supported placeholder schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderScheme {
    /// `{{pascalCase name}}` tokens, `.hbs` suffix
    #[default]
    Handlebars,
    /// `{{pascal_name}}` tokens, `.j2` suffix
    Jinja,
}

impl PlaceholderScheme {
    /// Returns the marker string for `style`.
    pub fn token(&self, style: CaseStyle) -> &'static str {
        match (self, style) {
            (Self::Handlebars, CaseStyle::Pascal) => "{{pascalCase name}}",
            (Self::Handlebars, CaseStyle::Camel) => "{{camelCase name}}",
            (Self::Handlebars, CaseStyle::Kebab) => "{{kebabCase name}}",
            (Self::Handlebars, CaseStyle::Snake) => "{{snakeCase name}}",
            (Self::Jinja, CaseStyle::Pascal) => "{{pascal_name}}",
            (Self::Jinja, CaseStyle::Camel) => "{{camel_name}}",
            (Self::Jinja, CaseStyle::Kebab) => "{{kebab_name}}",
            (Self::Jinja, CaseStyle::Snake) => "{{snake_name}}",
        }
    }

    /// Template marker suffix appended to every output filename.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Handlebars => ".hbs",
            Self::Jinja => ".j2",
        }
    }
}

impl std::fmt::Display for PlaceholderScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Handlebars => f.write_str("handlebars"),
            Self::Jinja => f.write_str("jinja"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_distinct_per_scheme() {
        for scheme in [PlaceholderScheme::Handlebars, PlaceholderScheme::Jinja] {
            let mut tokens: Vec<&str> = CaseStyle::ALL.iter().map(|s| scheme.token(*s)).collect();
            tokens.sort();
            tokens.dedup();
            assert_eq!(tokens.len(), 4, "{scheme} tokens collide");
        }
    }

    #[test]
    fn test_default_scheme() {
        assert_eq!(PlaceholderScheme::default(), PlaceholderScheme::Handlebars);
        assert_eq!(PlaceholderScheme::default().suffix(), ".hbs");
    }
}
