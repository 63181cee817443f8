//! Single range ring grammar: `generate a range ring from {country}`.

use rangecast_foundation::{AggregateFlags, Slot};
use rangecast_gazetteer::{Gazetteer, resolve_slot};

use crate::grammar::{BASE_VERBS, type_anchor};
use crate::normalize::strip_trailing_period;
use crate::scan;
use crate::status;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &["single range ring", "single ring", "range ring"];
/// Accepted country prepositions.
pub const PREPOSITIONS: &[&str] = &["from", "for"];

/// Parsed single range ring command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SingleParse {
    /// Leading command verb present.
    pub verb: bool,
    /// Type phrase present.
    pub type_phrase: bool,
    /// Country preposition present after the type phrase.
    pub preposition: bool,
    /// Launching country.
    pub country: Slot,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses normalized text as a single range ring command.
#[must_use]
pub fn parse(text: &str, gazetteer: &Gazetteer) -> SingleParse {
    let verb = scan::leading_verb(text, BASE_VERBS);
    let (type_phrase, anchor) = type_anchor(text, TYPE_PHRASES);

    let prep = scan::find_word_in_priority(text, PREPOSITIONS, anchor);
    let country = match prep {
        Some(hit) => {
            let raw = strip_trailing_period(text[hit.end..].trim());
            resolve_slot(raw, &[gazetteer.countries()])
        }
        None => Slot::absent(),
    };

    let flags = status::aggregate(verb && type_phrase && prep.is_some(), type_phrase, &[&country]);
    SingleParse {
        verb,
        type_phrase,
        preposition: prep.is_some(),
        country,
        flags,
    }
}
