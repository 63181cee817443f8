//! Input text normalization.

/// Normalizes input: trim, lowercase, collapse runs of whitespace.
///
/// Grammar parsers operate on this form. The Custom POI grammar is the one
/// exception: it splits groups on the raw text to keep newline separators
/// and original-case names.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Strips a single trailing period from extracted slot text.
#[must_use]
pub fn strip_trailing_period(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text).trim_end()
}
