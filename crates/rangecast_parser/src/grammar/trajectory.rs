//! Launch trajectory grammar:
//! `show launch trajectory from {origin} to {destination}`.

use rangecast_foundation::{AggregateFlags, Slot};
use rangecast_gazetteer::{Gazetteer, resolve_slot};

use crate::grammar::{BASE_VERBS, type_anchor};
use crate::normalize::strip_trailing_period;
use crate::scan;
use crate::status;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &[
    "launch trajectory",
    "trajectory",
    "flight path",
    "launch path",
];
/// Accepted destination prepositions, in priority order.
pub const DESTINATION_PREPOSITIONS: &[&str] = &["to", "toward", "towards"];
/// Extra verbs beyond the shared set.
const EXTRA_VERBS: &[&str] = &["visualize", "plot"];

/// Parsed launch trajectory command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrajectoryParse {
    /// Leading command verb present.
    pub verb: bool,
    /// Type phrase present.
    pub type_phrase: bool,
    /// `from` present after the type phrase.
    pub origin_prep: bool,
    /// Which destination preposition matched, if any.
    pub dest_prep: Option<&'static str>,
    /// Launch origin, city or country.
    pub origin: Slot,
    /// Impact destination, city or country.
    pub destination: Slot,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses normalized text as a launch trajectory command.
#[must_use]
pub fn parse(text: &str, gazetteer: &Gazetteer) -> TrajectoryParse {
    let verb = scan::leading_verb(text, BASE_VERBS) || scan::leading_verb(text, EXTRA_VERBS);
    let (type_phrase, anchor) = type_anchor(text, TYPE_PHRASES);
    let sets = gazetteer.cities_then_countries();

    let from = scan::find_word(text, "from", anchor);
    let (dest_prep, origin, destination) = match from {
        Some(from_hit) => {
            let remainder = strip_trailing_period(text[from_hit.end..].trim());
            split_route(remainder, &sets)
        }
        None => (None, Slot::absent(), Slot::absent()),
    };

    let tokens = verb && type_phrase && from.is_some() && dest_prep.is_some();
    let flags = status::aggregate(tokens, type_phrase, &[&origin, &destination]);
    TrajectoryParse {
        verb,
        type_phrase,
        origin_prep: from.is_some(),
        dest_prep,
        origin,
        destination,
        flags,
    }
}

/// Splits the post-`from` remainder into origin and destination.
///
/// A remainder that ends with a bare destination preposition means the
/// user is still typing; record the origin with an empty destination
/// rather than failing. No destination preposition at all makes the whole
/// remainder a partial origin.
fn split_route(
    remainder: &str,
    sets: &[&rangecast_gazetteer::NameSet],
) -> (Option<&'static str>, Slot, Slot) {
    match scan::find_word_in_priority(remainder, DESTINATION_PREPOSITIONS, 0) {
        Some(hit) => {
            let origin_raw = remainder[..hit.start].trim();
            let dest_raw = remainder[hit.end..].trim();
            let destination = if dest_raw.is_empty() {
                Slot::absent()
            } else {
                resolve_slot(dest_raw, sets)
            };
            (
                Some(hit.word),
                resolve_slot(origin_raw, sets),
                destination,
            )
        }
        None => (None, resolve_slot(remainder, sets), Slot::absent()),
    }
}
