//! Command type detection from keyword presence.
//!
//! Detection is pure substring presence on normalized text, with no mutual
//! exclusion across families except one: the generic phrase "range ring" is
//! a substring of every other ring family's type phrases, so the Single
//! flag is suppressed whenever Reverse, Minimum, or Multiple detect.

use crate::grammar;
use crate::scan;

/// Verbs that mark the input as a command rather than a question.
pub const COMMAND_VERBS: &[&str] = &[
    "generate",
    "create",
    "build",
    "show",
    "calculate",
    "compute",
];

/// Per-family detection flags for one input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeFlags {
    /// Reverse range ring keywords present.
    pub reverse: bool,
    /// Single range ring keywords present and not suppressed.
    pub single: bool,
    /// Minimum distance keywords present.
    pub minimum: bool,
    /// Multiple range ring keywords present.
    pub multiple: bool,
    /// Custom POI keywords present.
    pub custom_poi: bool,
    /// Launch trajectory keywords present.
    pub trajectory: bool,
    /// Text starts with a command verb.
    pub verb: bool,
}

impl TypeFlags {
    /// Whether any family detected.
    #[must_use]
    pub const fn any_family(&self) -> bool {
        self.reverse
            || self.single
            || self.minimum
            || self.multiple
            || self.custom_poi
            || self.trajectory
    }
}

/// Classifies normalized text into candidate family flags.
#[must_use]
pub fn detect(text: &str) -> TypeFlags {
    let reverse = contains_any(text, grammar::reverse::TYPE_PHRASES);
    let minimum = contains_any(text, grammar::minimum::TYPE_PHRASES);
    let multiple = contains_any(text, grammar::multiple::TYPE_PHRASES);
    let single =
        contains_any(text, grammar::single::TYPE_PHRASES) && !reverse && !minimum && !multiple;

    TypeFlags {
        reverse,
        single,
        minimum,
        multiple,
        custom_poi: contains_any(text, grammar::custom_poi::TYPE_PHRASES),
        trajectory: contains_any(text, grammar::trajectory::TYPE_PHRASES),
        verb: scan::leading_verb(text, COMMAND_VERBS),
    }
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
