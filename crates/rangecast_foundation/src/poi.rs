//! User-supplied points of interest with a minimum/maximum range band.

use crate::unit::DistanceUnit;

/// Validation status of a single POI group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PoiStatus {
    /// Fully specified and within all constraints.
    Exact,
    /// Usable but flagged; e.g. an implausibly large max range.
    Fuzzy,
    /// One or more constraint violations; see `messages`.
    Error,
}

/// A point of interest extracted from one input group.
///
/// A group that lacks a usable range is retained with `status = Error` and a
/// message rather than being dropped, so sibling groups stay unaffected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poi {
    /// Display name; defaults to a positional label when absent.
    pub name: String,
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub lon: f64,
    /// Inner edge of the range band; zero when a single range was given.
    pub min_range: f64,
    /// Outer edge of the range band.
    pub max_range: f64,
    /// Range unit; only `km` and `mi` are accepted for POIs.
    pub unit: DistanceUnit,
    /// Validation status for this group.
    pub status: PoiStatus,
    /// Human-readable constraint-violation messages.
    pub messages: Vec<String>,
}

impl Poi {
    /// Whether the POI can be handed to the geometry layer as-is.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !matches!(self.status, PoiStatus::Error)
    }
}
