//! Extracted slot values and their resolution status.

/// Tri-state resolution status of a slot against the gazetteer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchStatus {
    /// Literal gazetteer membership.
    Exact,
    /// Resolved through the heuristic fallback cascade.
    Fuzzy,
    /// No usable match.
    Absent,
}

impl MatchStatus {
    /// Whether the status represents a usable resolution.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Exact | Self::Fuzzy)
    }
}

/// A named piece of extracted text with its resolution result.
///
/// `raw` is the text as typed (normalized); `matched` is the canonical
/// gazetteer form when resolution succeeded.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    /// The extracted text, if the grammar captured anything.
    pub raw: Option<String>,
    /// Resolution status against the gazetteer.
    pub status: MatchStatus,
    /// Canonical form of the matched entry, if any.
    pub matched: Option<String>,
}

impl Slot {
    /// A slot the grammar never captured.
    #[must_use]
    pub const fn absent() -> Self {
        Self {
            raw: None,
            status: MatchStatus::Absent,
            matched: None,
        }
    }

    /// A slot with captured text that resolved to nothing.
    #[must_use]
    pub fn unresolved(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            status: MatchStatus::Absent,
            matched: None,
        }
    }

    /// A slot that resolved exactly.
    #[must_use]
    pub fn exact(raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            status: MatchStatus::Exact,
            matched: Some(canonical.into()),
        }
    }

    /// A slot that resolved through the fuzzy cascade.
    #[must_use]
    pub fn fuzzy(raw: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            status: MatchStatus::Fuzzy,
            matched: Some(canonical.into()),
        }
    }

    /// Whether the slot resolved (exactly or fuzzily).
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.status.is_resolved()
    }

    /// Whether the slot captured text that the gazetteer rejected.
    ///
    /// This is the "needs attention" signal: the analyst typed a name, but
    /// nothing matched it.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.raw.is_some() && matches!(self.status, MatchStatus::Absent)
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::absent()
    }
}
