//! Grammar families and aggregate UI states.

/// One of the six recognized command shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrammarFamily {
    /// Single range ring from one country.
    Single,
    /// Reverse range ring (launch envelope) against a target city.
    Reverse,
    /// Minimum distance between two locations.
    Minimum,
    /// Multiple range rings at listed distances.
    Multiple,
    /// Custom point-of-interest range rings.
    CustomPoi,
    /// Launch trajectory between two locations.
    Trajectory,
}

impl GrammarFamily {
    /// All families, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Single,
        Self::Reverse,
        Self::Minimum,
        Self::Multiple,
        Self::CustomPoi,
        Self::Trajectory,
    ];

    /// The tool label attached to parse results for this family.
    #[must_use]
    pub const fn tool_name(self) -> &'static str {
        match self {
            Self::Single => "Single Range Ring",
            Self::Reverse => "Reverse Range Ring",
            Self::Minimum => "Minimum Range Ring",
            Self::Multiple => "Multiple Range Rings",
            Self::CustomPoi => "Custom POI",
            Self::Trajectory => "Launch Trajectory",
        }
    }

    /// Precedence when several families claim partial validity at once.
    ///
    /// The family with the most specific keywords wins:
    /// Reverse > Minimum > Multiple > CustomPoi > Trajectory > Single.
    #[must_use]
    pub const fn specificity(self) -> u8 {
        match self {
            Self::Reverse => 6,
            Self::Minimum => 5,
            Self::Multiple => 4,
            Self::CustomPoi => 3,
            Self::Trajectory => 2,
            Self::Single => 1,
        }
    }
}

/// Aggregate feedback state derived from all evaluated families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UiStatus {
    /// No input text.
    Empty,
    /// A family matched partially; the command structure is incomplete.
    Typing,
    /// The winning family is complete with every slot exact.
    Valid,
    /// A slot captured text that resolved to nothing.
    Attention,
    /// The winning family is complete but at least one slot is fuzzy.
    Fuzzy,
    /// No family matched and the text starts with a command verb.
    Unrecognized,
    /// No family matched and no command verb; treated as a question.
    Query,
}
