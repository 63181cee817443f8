//! Anchored text scanning primitives shared by the grammar parsers.
//!
//! The original engine sliced strings with index arithmetic; these helpers
//! keep the same ordered-preference semantics behind named operations.
//! Preposition searches scan the enumerated priority list in order: the
//! first word in the *list* that occurs wins, not the left-most occurrence
//! in the string.

/// A located type phrase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseHit<'a> {
    /// The phrase that matched.
    pub phrase: &'a str,
    /// Byte offset of the phrase start.
    pub start: usize,
    /// Byte offset just past the phrase end.
    pub end: usize,
}

/// A located whole word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordHit<'a> {
    /// The word that matched.
    pub word: &'a str,
    /// Byte offset of the word start.
    pub start: usize,
    /// Byte offset just past the word end.
    pub end: usize,
}

/// Finds the first phrase from the list present in `text`.
///
/// The list is scanned in order, so more specific phrases must come first
/// ("single range ring" before "range ring").
#[must_use]
pub fn find_phrase<'a>(text: &str, phrases: &[&'a str]) -> Option<PhraseHit<'a>> {
    for phrase in phrases {
        if let Some(start) = text.find(phrase) {
            return Some(PhraseHit {
                phrase,
                start,
                end: start + phrase.len(),
            });
        }
    }
    None
}

/// Finds a whole-word occurrence of `word` at or after byte offset `from`.
#[must_use]
pub fn find_word<'a>(text: &str, word: &'a str, from: usize) -> Option<WordHit<'a>> {
    let tail = text.get(from..)?;
    for (offset, _) in tail.match_indices(word) {
        let start = from + offset;
        let end = start + word.len();
        let bounded_left = text[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_right = text[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if bounded_left && bounded_right {
            return Some(WordHit { word, start, end });
        }
    }
    None
}

/// Finds the first word from a priority list at or after `from`.
///
/// Words are tried in list order; the first word present anywhere in the
/// remainder wins even if a later word occurs earlier in the string.
#[must_use]
pub fn find_word_in_priority<'a>(
    text: &str,
    words: &[&'a str],
    from: usize,
) -> Option<WordHit<'a>> {
    words.iter().find_map(|word| find_word(text, word, from))
}

/// Whether the text starts with one of the given verbs as its first word.
#[must_use]
pub fn leading_verb(text: &str, verbs: &[&str]) -> bool {
    text.split_whitespace()
        .next()
        .is_some_and(|first| verbs.contains(&first))
}

/// Extracts every decimal number token from the text, in order.
#[must_use]
pub fn scan_numbers(text: &str) -> Vec<f64> {
    let mut numbers = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            current.push(c);
        } else if !current.is_empty() {
            if let Ok(value) = current.trim_matches('.').parse::<f64>() {
                numbers.push(value);
            }
            current.clear();
        }
    }
    if !current.is_empty() {
        if let Ok(value) = current.trim_matches('.').parse::<f64>() {
            numbers.push(value);
        }
    }
    numbers
}

/// Finds the first sentence-ending period at or after `from`.
///
/// A period between two digits is a decimal point, not a sentence end.
#[must_use]
pub fn find_sentence_period(text: &str, from: usize) -> Option<usize> {
    let tail = text.get(from..)?;
    for (offset, _) in tail.match_indices('.') {
        let pos = from + offset;
        let digit_left = text[..pos]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_digit());
        let digit_right = text[pos + 1..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        if !(digit_left && digit_right) {
            return Some(pos);
        }
    }
    None
}
