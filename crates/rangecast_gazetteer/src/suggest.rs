//! Scored suggestion ranking for autocomplete.
//!
//! Unlike the resolver cascade, this ranker scores every entry and sorts.
//! The two exist side by side on purpose: validation wants the first
//! acceptable candidate, autocomplete wants the best ten.

use crate::set::{NameSet, canonicalize};

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// One ranked autocomplete candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Suggestion<'a> {
    /// The display form to offer.
    pub display: &'a str,
    /// Match score; zero only for the unscored empty-term listing.
    pub score: u32,
}

/// Ranks display entries against a partial term.
///
/// Scores: exact case-insensitive match 100, starts-with 80, any word
/// starts-with 70, contains 50, a candidate word longer than two characters
/// contained in the term 40. Zero-scoring entries are excluded. The sort is
/// stable and descending, truncated to `limit`. An empty term returns the
/// first `limit` entries unscored.
#[must_use]
pub fn rank<'a>(term: &str, set: &'a NameSet, limit: usize) -> Vec<Suggestion<'a>> {
    let needle = canonicalize(term);
    if needle.is_empty() {
        return set
            .entries()
            .iter()
            .take(limit)
            .map(|entry| Suggestion {
                display: &entry.display,
                score: 0,
            })
            .collect();
    }

    let mut ranked: Vec<Suggestion<'a>> = set
        .entries()
        .iter()
        .filter_map(|entry| {
            let score = score_candidate(&needle, &entry.canonical);
            (score > 0).then_some(Suggestion {
                display: &entry.display,
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

fn score_candidate(needle: &str, candidate: &str) -> u32 {
    if candidate == needle {
        return 100;
    }
    if candidate.starts_with(needle) {
        return 80;
    }
    if words(candidate).any(|word| word.starts_with(needle)) {
        return 70;
    }
    if candidate.contains(needle) {
        return 50;
    }
    if words(candidate).any(|word| word.len() > 2 && needle.contains(word)) {
        return 40;
    }
    0
}

fn words(candidate: &str) -> impl Iterator<Item = &str> {
    candidate
        .split([' ', ','])
        .filter(|word| !word.is_empty())
}
