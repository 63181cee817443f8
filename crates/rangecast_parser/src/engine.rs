//! The parsing engine: one stateless entry point per text-change event.

use rangecast_foundation::{AggregateFlags, GrammarFamily, UiStatus};
use rangecast_gazetteer::{DEFAULT_SUGGESTION_LIMIT, Gazetteer, Suggestion, rank};

use crate::detect::{self, TypeFlags};
use crate::grammar::{custom_poi, minimum, multiple, reverse, single, trajectory};
use crate::messages;
use crate::normalize;

/// Every family's parse for one input.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Parses {
    /// Single range ring parse.
    pub single: single::SingleParse,
    /// Reverse range ring parse.
    pub reverse: reverse::ReverseParse,
    /// Minimum distance parse.
    pub minimum: minimum::MinimumParse,
    /// Multiple range rings parse.
    pub multiple: multiple::MultipleParse,
    /// Custom POI parse.
    pub custom_poi: custom_poi::CustomPoiParse,
    /// Launch trajectory parse.
    pub trajectory: trajectory::TrajectoryParse,
}

impl Parses {
    /// Aggregate flags for one family.
    #[must_use]
    pub fn flags(&self, family: GrammarFamily) -> AggregateFlags {
        match family {
            GrammarFamily::Single => self.single.flags,
            GrammarFamily::Reverse => self.reverse.flags,
            GrammarFamily::Minimum => self.minimum.flags,
            GrammarFamily::Multiple => self.multiple.flags,
            GrammarFamily::CustomPoi => self.custom_poi.flags,
            GrammarFamily::Trajectory => self.trajectory.flags,
        }
    }

    /// Whether one of the family's slots holds text the resolver rejected.
    #[must_use]
    pub fn rejected(&self, family: GrammarFamily) -> bool {
        match family {
            GrammarFamily::Single => self.single.country.is_rejected(),
            GrammarFamily::Reverse => {
                self.reverse.country.is_rejected() || self.reverse.city.is_rejected()
            }
            GrammarFamily::Minimum => {
                self.minimum.location_a.is_rejected()
                    || self.minimum.location_b.is_rejected()
                    || self.minimum.same_location
            }
            GrammarFamily::Multiple => self.multiple.country.is_rejected(),
            GrammarFamily::CustomPoi => self.custom_poi.pois.iter().any(|poi| !poi.is_usable()),
            GrammarFamily::Trajectory => {
                self.trajectory.origin.is_rejected() || self.trajectory.destination.is_rejected()
            }
        }
    }
}

/// The full result of one engine call.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EngineReport {
    /// Command type detection flags.
    pub detected: TypeFlags,
    /// Per-family parses.
    pub parses: Parses,
    /// Winning family, when one reached partial validity.
    pub family: Option<GrammarFamily>,
    /// Aggregate UI status.
    pub status: UiStatus,
    /// Status message for the UI.
    pub message: &'static str,
    /// Family-specific redirect or format hint, when one applies.
    pub hint: Option<&'static str>,
}

/// Stateless command parsing engine over a fixed gazetteer.
///
/// Every [`parse`](Self::parse) call is a pure transform of the current
/// text; the gazetteer is the only cross-call state and is never mutated.
#[derive(Clone, Debug)]
pub struct CommandEngine {
    gazetteer: Gazetteer,
}

impl CommandEngine {
    /// Creates an engine over the given gazetteer.
    #[must_use]
    pub const fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// The gazetteer this engine resolves against.
    #[must_use]
    pub const fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    /// Parses the current text into a full report.
    #[must_use]
    pub fn parse(&self, text: &str) -> EngineReport {
        let normalized = normalize::normalize(text);
        let detected = detect::detect(&normalized);
        let parses = Parses {
            single: single::parse(&normalized, &self.gazetteer),
            reverse: reverse::parse(&normalized, &self.gazetteer),
            minimum: minimum::parse(&normalized, &self.gazetteer),
            multiple: multiple::parse(&normalized, &self.gazetteer),
            custom_poi: custom_poi::parse(&normalized, text),
            trajectory: trajectory::parse(&normalized, &self.gazetteer),
        };

        if normalized.is_empty() {
            return EngineReport {
                detected,
                parses,
                family: None,
                status: UiStatus::Empty,
                message: messages::status_message(UiStatus::Empty),
                hint: None,
            };
        }

        let family = winner(detected, &parses);
        let status = match family {
            Some(family) => family_status(family, &parses),
            None => {
                if detected.verb {
                    UiStatus::Unrecognized
                } else {
                    UiStatus::Query
                }
            }
        };
        let hint = family.and_then(|family| match status {
            UiStatus::Typing => Some(messages::redirect_hint(family)),
            UiStatus::Attention | UiStatus::Fuzzy => Some(messages::format_hint(family)),
            _ => None,
        });

        EngineReport {
            detected,
            parses,
            family,
            status,
            message: messages::status_message(status),
            hint,
        }
    }

    /// Ranked country suggestions for a partial term.
    #[must_use]
    pub fn suggest_countries(&self, term: &str) -> Vec<Suggestion<'_>> {
        rank(term, self.gazetteer.countries(), DEFAULT_SUGGESTION_LIMIT)
    }

    /// Ranked city suggestions for a partial term.
    #[must_use]
    pub fn suggest_cities(&self, term: &str) -> Vec<Suggestion<'_>> {
        rank(term, self.gazetteer.cities(), DEFAULT_SUGGESTION_LIMIT)
    }
}

/// Picks the family the report speaks for.
///
/// Families whose type phrase detected outrank families that only have a
/// resolved slot; ties break by keyword specificity, so the generic
/// single ring family never shadows the more specific ones.
fn winner(detected: TypeFlags, parses: &Parses) -> Option<GrammarFamily> {
    GrammarFamily::ALL
        .into_iter()
        .filter(|family| parses.flags(*family).partial_valid)
        .max_by_key(|family| (family_detected(detected, *family), family.specificity()))
}

const fn family_detected(detected: TypeFlags, family: GrammarFamily) -> bool {
    match family {
        GrammarFamily::Single => detected.single,
        GrammarFamily::Reverse => detected.reverse,
        GrammarFamily::Minimum => detected.minimum,
        GrammarFamily::Multiple => detected.multiple,
        GrammarFamily::CustomPoi => detected.custom_poi,
        GrammarFamily::Trajectory => detected.trajectory,
    }
}

fn family_status(family: GrammarFamily, parses: &Parses) -> UiStatus {
    let flags = parses.flags(family);
    if flags.all_exact {
        UiStatus::Valid
    } else if flags.all_valid {
        UiStatus::Fuzzy
    } else if parses.rejected(family) {
        UiStatus::Attention
    } else {
        UiStatus::Typing
    }
}
