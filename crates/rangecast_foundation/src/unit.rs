//! Distance units accepted by the grammars.

/// A distance unit token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    /// Kilometers (`km`).
    #[cfg_attr(feature = "serde", serde(rename = "km"))]
    Kilometers,
    /// Statute miles (`mi`).
    #[cfg_attr(feature = "serde", serde(rename = "mi"))]
    Miles,
    /// Nautical miles (`nm`); accepted by the Multiple grammar only.
    #[cfg_attr(feature = "serde", serde(rename = "nm"))]
    NauticalMiles,
}

impl DistanceUnit {
    /// Parses a lowercased unit word.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "km" => Some(Self::Kilometers),
            "mi" => Some(Self::Miles),
            "nm" => Some(Self::NauticalMiles),
            _ => None,
        }
    }

    /// The canonical unit token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
            Self::NauticalMiles => "nm",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
