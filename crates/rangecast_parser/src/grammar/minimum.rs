//! Minimum distance grammar:
//! `calculate minimum distance between {location} and {location}`.

use rangecast_foundation::{AggregateFlags, Slot};
use rangecast_gazetteer::{Gazetteer, resolve_slot};

use crate::grammar::{BASE_VERBS, type_anchor};
use crate::normalize::strip_trailing_period;
use crate::scan;
use crate::status;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &[
    "minimum range ring",
    "minimum distance",
    "min distance",
    "min range",
];
/// Accepted leading prepositions.
pub const PREPOSITIONS: &[&str] = &["between", "from"];
/// Connector words between the two locations, in priority order.
pub const CONNECTORS: &[&str] = &["and", "to"];
/// Extra verbs beyond the shared set.
const EXTRA_VERBS: &[&str] = &["calculate", "compute"];

/// Parsed minimum distance command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MinimumParse {
    /// Leading command verb present.
    pub verb: bool,
    /// Type phrase present.
    pub type_phrase: bool,
    /// Leading preposition present after the type phrase.
    pub preposition: bool,
    /// Which connector matched, if any.
    pub connector: Option<&'static str>,
    /// First location, country or city.
    pub location_a: Slot,
    /// Second location, country or city.
    pub location_b: Slot,
    /// Both slots name the same place, which makes the command invalid.
    pub same_location: bool,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses normalized text as a minimum distance command.
#[must_use]
pub fn parse(text: &str, gazetteer: &Gazetteer) -> MinimumParse {
    let verb = scan::leading_verb(text, BASE_VERBS) || scan::leading_verb(text, EXTRA_VERBS);
    let (type_phrase, anchor) = type_anchor(text, TYPE_PHRASES);
    let sets = gazetteer.countries_then_cities();

    let prep = scan::find_word_in_priority(text, PREPOSITIONS, anchor);
    let (connector, location_a, location_b) = match prep {
        Some(prep_hit) => match scan::find_word_in_priority(text, CONNECTORS, prep_hit.end) {
            Some(conn_hit) => {
                let a_raw = text[prep_hit.end..conn_hit.start].trim();
                let b_raw = strip_trailing_period(text[conn_hit.end..].trim());
                (
                    Some(conn_hit.word),
                    resolve_slot(a_raw, &sets),
                    resolve_slot(b_raw, &sets),
                )
            }
            None => {
                let a_raw = strip_trailing_period(text[prep_hit.end..].trim());
                (None, resolve_slot(a_raw, &sets), Slot::absent())
            }
        },
        None => (None, Slot::absent(), Slot::absent()),
    };

    let same_location = same_place(&location_a, &location_b);
    let tokens = verb && type_phrase && prep.is_some() && connector.is_some();
    let mut flags = status::aggregate(tokens, type_phrase, &[&location_a, &location_b]);
    if same_location {
        flags.all_exact = false;
        flags.all_valid = false;
    }

    MinimumParse {
        verb,
        type_phrase,
        preposition: prep.is_some(),
        connector,
        location_a,
        location_b,
        same_location,
        flags,
    }
}

/// Two filled slots naming the same place. Resolved slots compare by
/// canonical form, otherwise by raw text.
fn same_place(a: &Slot, b: &Slot) -> bool {
    match (&a.matched, &b.matched) {
        (Some(ca), Some(cb)) => ca == cb,
        _ => match (&a.raw, &b.raw) {
            (Some(ra), Some(rb)) => ra == rb,
            _ => false,
        },
    }
}
