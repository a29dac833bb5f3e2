//! Replacement of name variants with placeholder tokens, and back.
//!
//! Matching is literal substring matching, so no variant ever needs
//! escaping. None of these functions touch the filesystem.

use crate::placeholder::PlaceholderScheme;
use crate::variants::VariantSet;

/// A run of untouched source text or an inserted token.
#[derive(Debug)]
enum Segment<'a> {
    Text(&'a str),
    Token(&'static str),
}

/// Replaces every occurrence of every variant in `text` with its token.
///
/// Variants are replaced one after another in precedence order (pascal,
/// camel, kebab, snake), each fully before the next starts. A pass only
/// looks at source text, never inside tokens inserted by an earlier pass,
/// so names such as `Name` cannot corrupt the `{{camelCase name}}` token.
/// Text without any variant is returned unchanged.
pub fn substitute_content(text: &str, variants: &VariantSet, scheme: PlaceholderScheme) -> String {
    let mut segments = vec![Segment::Text(text)];

    for (style, variant) in variants.iter() {
        let token = scheme.token(style);
        segments = segments
            .into_iter()
            .flat_map(|segment| match segment {
                Segment::Text(text) => split_on(text, variant, token),
                inserted @ Segment::Token(_) => vec![inserted],
            })
            .collect();
    }

    let mut result = String::with_capacity(text.len());
    for segment in segments {
        match segment {
            Segment::Text(text) => result.push_str(text),
            Segment::Token(token) => result.push_str(token),
        }
    }
    result
}

fn split_on<'a>(text: &'a str, needle: &str, token: &'static str) -> Vec<Segment<'a>> {
    if needle.is_empty() {
        return vec![Segment::Text(text)];
    }

    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(index) = rest.find(needle) {
        if index > 0 {
            segments.push(Segment::Text(&rest[..index]));
        }
        segments.push(Segment::Token(token));
        rest = &rest[index + needle.len()..];
    }
    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }

    segments
}

/// Returns the template filename for `file_name`.
///
/// Only the first variant (in precedence order) contained in the name is
/// substituted; all of its occurrences are replaced and later variants are
/// not looked at. The scheme suffix is appended whether or not anything
/// matched.
pub fn rename_for_template(
    file_name: &str,
    variants: &VariantSet,
    scheme: PlaceholderScheme,
) -> String {
    let mut renamed = match variants.iter().find(|(_, variant)| file_name.contains(variant)) {
        Some((style, variant)) => file_name.replace(variant, scheme.token(style)),
        None => file_name.to_string(),
    };
    renamed.push_str(scheme.suffix());
    renamed
}

/// Replaces every token in `text` with the variant it stands for.
///
/// This is the inverse of [`substitute_content`] for text that contained
/// no tokens to begin with.
pub fn restore_content(text: &str, variants: &VariantSet, scheme: PlaceholderScheme) -> String {
    variants
        .iter()
        .fold(text.to_string(), |acc, (style, variant)| acc.replace(scheme.token(style), variant))
}

/// Returns the concrete filename for a template filename.
///
/// Strips the scheme suffix (if present) and restores every token.
pub fn restore_file_name(
    file_name: &str,
    variants: &VariantSet,
    scheme: PlaceholderScheme,
) -> String {
    let stem = file_name.strip_suffix(scheme.suffix()).unwrap_or(file_name);
    restore_content(stem, variants, scheme)
}
