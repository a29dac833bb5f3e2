//! Derivation of the four case renderings of a component name.

use log::warn;
use regex::Regex;
use std::sync::LazyLock;

static PASCAL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("pascal case pattern is valid"));

/// One of the case styles a component name is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// `MyComponent`
    Pascal,
    /// `myComponent`
    Camel,
    /// `my-component`
    Kebab,
    /// `my_component`
    Snake,
}

impl CaseStyle {
    /// All styles in substitution precedence order.
    pub const ALL: [CaseStyle; 4] =
        [CaseStyle::Pascal, CaseStyle::Camel, CaseStyle::Kebab, CaseStyle::Snake];
}

/// The case variants of a single canonical name.
///
/// Computed once per run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VariantSet {
    pub pascal: String,
    pub camel: String,
    pub kebab: String,
    pub snake: String,
}

impl VariantSet {
    /// Derives all variants from a PascalCase name.
    ///
    /// Separators are inserted only where an ASCII lowercase letter is directly
    /// followed by an ASCII uppercase letter, so `MyUiComponent` becomes
    /// `my-ui-component` and an acronym run such as `HTML` stays in one piece.
    ///
    /// The name must be non-empty.
    pub fn derive(name: &str) -> Self {
        debug_assert!(!name.is_empty(), "component name must not be empty");

        let mut chars = name.chars();
        let camel = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        };

        Self {
            pascal: name.to_string(),
            camel,
            kebab: split_words(name, '-').to_lowercase(),
            snake: split_words(name, '_').to_lowercase(),
        }
    }

    /// Returns the rendering for one style.
    pub fn get(&self, style: CaseStyle) -> &str {
        match style {
            CaseStyle::Pascal => &self.pascal,
            CaseStyle::Camel => &self.camel,
            CaseStyle::Kebab => &self.kebab,
            CaseStyle::Snake => &self.snake,
        }
    }

    /// Iterates `(style, variant)` pairs in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (CaseStyle, &str)> {
        CaseStyle::ALL.into_iter().map(move |style| (style, self.get(style)))
    }
}

/// Inserts `separator` at every lowercase-to-uppercase boundary.
fn split_words(name: &str, separator: char) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev_was_lowercase = false;

    for c in name.chars() {
        if prev_was_lowercase && c.is_ascii_uppercase() {
            result.push(separator);
        }
        result.push(c);
        prev_was_lowercase = c.is_ascii_lowercase();
    }

    result
}

/// Logs a warning when `name` does not look like PascalCase.
///
/// Uses the same rule as the component file pattern, so acronym-led names
/// such as `HTMLParser` pass. Returns whether the name passed the check; the
/// result is advisory only.
pub fn check_pascal_case(name: &str) -> bool {
    let is_pascal = PASCAL_CASE.is_match(name);
    if !is_pascal {
        warn!("Component name '{name}' is not PascalCase; case variants may be surprising");
    }
    is_pascal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_keeps_acronym_runs() {
        assert_eq!(split_words("HTMLButton", '-'), "HTMLButton");
        assert_eq!(split_words("MyHTMLButton", '-'), "My-HTMLButton");
        assert_eq!(split_words("Item2Row", '_'), "Item2Row");
    }

    #[test]
    fn test_single_letter_name_collapses_lowercase_variants() {
        let variants = VariantSet::derive("X");
        assert_eq!(variants.pascal, "X");
        assert_eq!(variants.camel, "x");
        assert_eq!(variants.kebab, "x");
        assert_eq!(variants.snake, "x");
    }

    #[test]
    fn test_check_pascal_case() {
        assert!(check_pascal_case("MyComponent"));
        assert!(check_pascal_case("HTMLParser"));
        assert!(check_pascal_case("Item2Row"));
        assert!(check_pascal_case("X"));
        assert!(!check_pascal_case("myComponent"));
        assert!(!check_pascal_case("my_component"));
        assert!(!check_pascal_case("My-Component"));
    }

    #[test]
    fn test_iter_follows_precedence() {
        let variants = VariantSet::derive("MyComponent");
        let styles: Vec<CaseStyle> = variants.iter().map(|(style, _)| style).collect();
        assert_eq!(styles, CaseStyle::ALL.to_vec());
    }
}
