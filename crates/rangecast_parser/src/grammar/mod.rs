//! Per-family grammar parsers.
//!
//! Every parser follows the same shape: anchor a leading verb, locate the
//! family's type phrase anywhere in the text, then scan for required
//! prepositions strictly after the type phrase. Slot text is whatever
//! remains between anchors, with a single trailing period stripped.

pub mod custom_poi;
pub mod minimum;
pub mod multiple;
pub mod reverse;
pub mod single;
pub mod trajectory;

use crate::scan;

/// Verbs accepted by the ring-generation families.
pub const BASE_VERBS: &[&str] = &["generate", "create", "build", "show"];

/// Locates the family type phrase and returns the search origin for
/// prepositions. Without a type phrase the scan starts at the text head,
/// so a command missing only its type phrase still fills its other slots.
pub(crate) fn type_anchor(text: &str, phrases: &[&str]) -> (bool, usize) {
    match scan::find_phrase(text, phrases) {
        Some(hit) => (true, hit.end),
        None => (false, 0),
    }
}
