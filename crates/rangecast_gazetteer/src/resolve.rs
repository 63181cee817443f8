//! First-match entity resolution for slot validation.
//!
//! The fuzzy cascade is ordered, not scored: each stage scans every set in
//! insertion order before the next stage is tried, and the first hit wins.
//! This is intentionally unlike the ranker in [`crate::suggest`], which
//! scores and sorts; validation wants a deterministic cheap answer, not the
//! best answer.

use rangecast_foundation::Slot;

use crate::set::{NameEntry, NameSet, canonicalize};

/// Resolves a term by literal membership.
///
/// Sets are scanned in the order given; the first set containing the term
/// wins. Returns the matched entry.
#[must_use]
pub fn resolve_exact<'a>(term: &str, sets: &[&'a NameSet]) -> Option<&'a NameEntry> {
    let needle = canonicalize(term);
    if needle.is_empty() {
        return None;
    }
    sets.iter().find_map(|set| set.get(&needle))
}

/// Resolves a term through the fallback cascade.
///
/// Cascade stages, in order, first success wins:
/// 1. literal membership,
/// 2. prefix relation either way between term and candidate,
/// 3. prefix relation between the term and any whitespace- or
///    comma-delimited word of a candidate,
/// 4. substring containment either way.
#[must_use]
pub fn resolve_fuzzy<'a>(term: &str, sets: &[&'a NameSet]) -> Option<&'a NameEntry> {
    let needle = canonicalize(term);
    if needle.is_empty() {
        return None;
    }

    if let Some(entry) = sets.iter().find_map(|set| set.get(&needle)) {
        return Some(entry);
    }

    for set in sets {
        for entry in set.entries() {
            if entry.canonical.starts_with(&needle) || needle.starts_with(&entry.canonical) {
                return Some(entry);
            }
        }
    }

    for set in sets {
        for entry in set.entries() {
            let word_hit = candidate_words(&entry.canonical)
                .any(|word| word.starts_with(&needle) || needle.starts_with(word));
            if word_hit {
                return Some(entry);
            }
        }
    }

    for set in sets {
        for entry in set.entries() {
            if entry.canonical.contains(&needle) || needle.contains(&entry.canonical) {
                return Some(entry);
            }
        }
    }

    None
}

/// Derives a slot from raw extracted text.
///
/// Exact if literal membership succeeds, else Fuzzy if the cascade finds a
/// candidate, else the raw text is kept with Absent status.
#[must_use]
pub fn resolve_slot(raw: &str, sets: &[&NameSet]) -> Slot {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Slot::absent();
    }
    if let Some(entry) = resolve_exact(trimmed, sets) {
        Slot::exact(trimmed, entry.canonical.clone())
    } else if let Some(entry) = resolve_fuzzy(trimmed, sets) {
        Slot::fuzzy(trimmed, entry.canonical.clone())
    } else {
        Slot::unresolved(trimmed)
    }
}

fn candidate_words(canonical: &str) -> impl Iterator<Item = &str> {
    canonical
        .split([' ', ','])
        .filter(|word| !word.is_empty())
}
