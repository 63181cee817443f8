//! Reverse range ring grammar:
//! `generate a reverse range ring from {country} against {city}`.

use rangecast_foundation::{AggregateFlags, Slot};
use rangecast_gazetteer::{Gazetteer, resolve_slot};

use crate::grammar::{BASE_VERBS, type_anchor};
use crate::normalize::strip_trailing_period;
use crate::scan;
use crate::status;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &[
    "reverse range ring",
    "reverse ring",
    "launch envelope",
    "reverse range",
];
/// Accepted origin prepositions.
pub const ORIGIN_PREPOSITIONS: &[&str] = &["from", "within", "inside", "for", "between"];
/// Accepted target prepositions, in priority order.
pub const TARGET_PREPOSITIONS: &[&str] = &["against", "to", "toward", "towards"];

/// Parsed reverse range ring command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReverseParse {
    /// Leading command verb present.
    pub verb: bool,
    /// Type phrase present.
    pub type_phrase: bool,
    /// Origin preposition present after the type phrase.
    pub origin_prep: bool,
    /// Which target preposition matched, if any.
    pub target_prep: Option<&'static str>,
    /// Launching country.
    pub country: Slot,
    /// Targeted city.
    pub city: Slot,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses normalized text as a reverse range ring command.
#[must_use]
pub fn parse(text: &str, gazetteer: &Gazetteer) -> ReverseParse {
    let verb = scan::leading_verb(text, BASE_VERBS);
    let (type_phrase, anchor) = type_anchor(text, TYPE_PHRASES);

    let origin = scan::find_word_in_priority(text, ORIGIN_PREPOSITIONS, anchor);
    let (target_prep, country, city) = match origin {
        Some(origin_hit) => split_targets(text, origin_hit.end, gazetteer),
        None => (None, Slot::absent(), Slot::absent()),
    };

    let tokens = verb && type_phrase && origin.is_some() && target_prep.is_some();
    let flags = status::aggregate(tokens, type_phrase, &[&country, &city]);
    ReverseParse {
        verb,
        type_phrase,
        origin_prep: origin.is_some(),
        target_prep,
        country,
        city,
        flags,
    }
}

fn split_targets(
    text: &str,
    after_origin: usize,
    gazetteer: &Gazetteer,
) -> (Option<&'static str>, Slot, Slot) {
    match scan::find_word_in_priority(text, TARGET_PREPOSITIONS, after_origin) {
        Some(hit) => {
            let country_raw = text[after_origin..hit.start].trim();
            let city_raw = strip_trailing_period(text[hit.end..].trim());
            (
                Some(hit.word),
                resolve_slot(country_raw, &[gazetteer.countries()]),
                resolve_slot(city_raw, &[gazetteer.cities()]),
            )
        }
        None => {
            // Target preposition not typed yet: the whole remainder is a
            // country in progress.
            let country_raw = strip_trailing_period(text[after_origin..].trim());
            (
                None,
                resolve_slot(country_raw, &[gazetteer.countries()]),
                Slot::absent(),
            )
        }
    }
}
