//! Per-family validity summaries.

/// Aggregate flags computed for one family's parse result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateFlags {
    /// Every required token present and every slot exact.
    pub all_exact: bool,
    /// Every required token present; slots exact or fuzzy.
    pub all_valid: bool,
    /// At least one required slot resolved fuzzily.
    pub has_fuzzy: bool,
    /// The type phrase matched or at least one slot resolved; enough signal
    /// to show a family-specific redirect hint for incomplete input.
    pub partial_valid: bool,
}
