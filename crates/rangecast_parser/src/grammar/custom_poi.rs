//! Custom POI grammar: free-form POI groups with no verb or preposition
//! requirements. Group parsing lives in [`crate::poi`].

use rangecast_foundation::{AggregateFlags, Poi, PoiStatus};

use crate::poi;

/// Type phrases, most specific first.
pub const TYPE_PHRASES: &[&str] = &["custom poi", "custom point", "point of interest", "poi"];

/// Parsed custom POI command.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CustomPoiParse {
    /// Type phrase present.
    pub type_phrase: bool,
    /// Parsed POI groups, malformed ones included.
    pub pois: Vec<Poi>,
    /// Aggregate validity flags.
    pub flags: AggregateFlags,
}

/// Parses a custom POI command.
///
/// Takes both text forms: the normalized one for type phrase detection
/// and the raw one for group parsing, so POI names keep their casing.
#[must_use]
pub fn parse(normalized: &str, raw: &str) -> CustomPoiParse {
    let type_phrase = TYPE_PHRASES.iter().any(|phrase| normalized.contains(phrase));
    let pois = poi::parse_batch(raw);

    let usable = !pois.is_empty() && pois.iter().all(Poi::is_usable);
    // A group that failed validation only claims the family when the type
    // phrase backs it up; two bare numbers in prose are not a POI command.
    let flags = AggregateFlags {
        all_exact: usable && pois.iter().all(|poi| poi.status == PoiStatus::Exact),
        all_valid: usable,
        has_fuzzy: pois.iter().any(|poi| poi.status == PoiStatus::Fuzzy),
        partial_valid: type_phrase || pois.iter().any(Poi::is_usable),
    };

    CustomPoiParse {
        type_phrase,
        pois,
        flags,
    }
}
