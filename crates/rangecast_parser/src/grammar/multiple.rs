//! Multiple range rings grammar:
//! `generate multiple range rings from {country} at {d1, d2...} {unit}.
//! the respective missile names are {n1, n2...}.`

use rangecast_foundation::{AggregateFlags, DistanceUnit, MatchStatus, Slot};
use rangecast_gazetteer::{Gazetteer, resolve_slot};

use crate::grammar::{BASE_VERBS, type_anchor};
use crate::normalize::strip_trailing_period;
use crate::scan;
use crate::status;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &[
    "multiple range rings",
    "multiple range ring",
    "multiple rings",
];
/// Accepted country prepositions.
pub const PREPOSITIONS: &[&str] = &["from", "for"];
/// Unit tokens, in priority order.
pub const UNIT_WORDS: &[&str] = &["km", "mi", "nm"];
/// Marker introducing the missile name list.
pub const NAMES_MARKER: &str = "missile names are ";

/// Parsed multiple range rings command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MultipleParse {
    /// Leading command verb present.
    pub verb: bool,
    /// Type phrase present.
    pub type_phrase: bool,
    /// Country preposition present after the type phrase.
    pub preposition: bool,
    /// Literal `at` marker present after the preposition.
    pub at_marker: bool,
    /// Launching country.
    pub country: Slot,
    /// Ring distances in the order typed.
    pub distances: Vec<f64>,
    /// Distance unit, when one was typed.
    pub unit: Option<DistanceUnit>,
    /// Missile names in the order typed.
    pub missile_names: Vec<String>,
    /// Exact when the name count matches the distance count, fuzzy on a
    /// mismatch, absent when no names were given.
    pub missile_status: MatchStatus,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses normalized text as a multiple range rings command.
#[must_use]
pub fn parse(text: &str, gazetteer: &Gazetteer) -> MultipleParse {
    let verb = scan::leading_verb(text, BASE_VERBS);
    let (type_phrase, anchor) = type_anchor(text, TYPE_PHRASES);

    let prep = scan::find_word_in_priority(text, PREPOSITIONS, anchor);
    let at = prep.and_then(|prep_hit| scan::find_word(text, "at", prep_hit.end));

    let country = match (prep, at) {
        (Some(prep_hit), Some(at_hit)) => {
            resolve_slot(text[prep_hit.end..at_hit.start].trim(), &[gazetteer.countries()])
        }
        (Some(prep_hit), None) => resolve_slot(
            strip_trailing_period(text[prep_hit.end..].trim()),
            &[gazetteer.countries()],
        ),
        _ => Slot::absent(),
    };

    let (distances, unit) = match at {
        Some(at_hit) => parse_distances(text, at_hit.end),
        None => (Vec::new(), None),
    };

    let missile_names = parse_missile_names(text);
    let missile_status = if missile_names.is_empty() {
        MatchStatus::Absent
    } else if missile_names.len() == distances.len() {
        MatchStatus::Exact
    } else {
        MatchStatus::Fuzzy
    };

    let tokens = verb
        && type_phrase
        && prep.is_some()
        && at.is_some()
        && !distances.is_empty()
        && unit.is_some();
    let mut flags = status::aggregate(tokens, type_phrase, &[&country]);
    if missile_status == MatchStatus::Fuzzy {
        flags.all_exact = false;
        flags.has_fuzzy = true;
    }

    MultipleParse {
        verb,
        type_phrase,
        preposition: prep.is_some(),
        at_marker: at.is_some(),
        country,
        distances,
        unit,
        missile_names,
        missile_status,
        flags,
    }
}

/// Reads distances and the unit from the segment between the `at` marker
/// and the first sentence period.
fn parse_distances(text: &str, from: usize) -> (Vec<f64>, Option<DistanceUnit>) {
    let end = scan::find_sentence_period(text, from).unwrap_or(text.len());
    let segment = &text[from..end];
    match scan::find_word_in_priority(segment, UNIT_WORDS, 0) {
        Some(hit) => (
            scan::scan_numbers(&segment[..hit.start]),
            DistanceUnit::from_word(hit.word),
        ),
        None => (scan::scan_numbers(segment), None),
    }
}

/// Captures the missile name list from anywhere in the text.
fn parse_missile_names(text: &str) -> Vec<String> {
    let Some(start) = text.find(NAMES_MARKER) else {
        return Vec::new();
    };
    let from = start + NAMES_MARKER.len();
    let end = scan::find_sentence_period(text, from).unwrap_or(text.len());
    text[from..end]
        .replace(" and ", ",")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
