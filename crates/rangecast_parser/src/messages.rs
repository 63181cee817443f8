//! Fixed catalog of status messages and per-family hints.

use rangecast_foundation::{GrammarFamily, UiStatus};

/// Human-readable message for an aggregate UI status.
#[must_use]
pub const fn status_message(status: UiStatus) -> &'static str {
    match status {
        UiStatus::Empty => "Type your command to see validation...",
        UiStatus::Typing => "Keep typing... some fields are still incomplete.",
        UiStatus::Valid => "Command looks valid. Ready to execute.",
        UiStatus::Attention => "Some fields need attention. Check the rejected entries.",
        UiStatus::Fuzzy => "Command may work, but check near-miss names for exact spelling.",
        UiStatus::Unrecognized => "Unrecognized command. Try one of the documented command formats.",
        UiStatus::Query => "This reads as a question rather than a command.",
    }
}

/// Redirect hint shown when a partial command matches a family.
#[must_use]
pub const fn redirect_hint(family: GrammarFamily) -> &'static str {
    match family {
        GrammarFamily::Single => "This looks like a Single Range Ring command.",
        GrammarFamily::Reverse => "This looks like a Reverse Range Ring command.",
        GrammarFamily::Minimum => "This looks like a Minimum Range Ring command.",
        GrammarFamily::Multiple => "This looks like a Multiple Range Rings command.",
        GrammarFamily::CustomPoi => "This looks like a Custom POI command.",
        GrammarFamily::Trajectory => "This looks like a Launch Trajectory command.",
    }
}

/// Full-format hint for a family, shown for incomplete or rejected input.
#[must_use]
pub const fn format_hint(family: GrammarFamily) -> &'static str {
    match family {
        GrammarFamily::Single => {
            "Use the format: Generate a {single range ring|single ring|range ring} {from|for} {Country}."
        }
        GrammarFamily::Reverse => {
            "Use the format: Generate a {reverse range ring|reverse ring|launch envelope|reverse range} from {Country} {against|to|toward|towards} {City}."
        }
        GrammarFamily::Minimum => {
            "Use the format: Calculate {minimum range ring|min distance|minimum distance} between {Location A} and {Location B}."
        }
        GrammarFamily::Multiple => {
            "Use the format: Generate multiple range rings from {Country} at {distance 1, distance 2...} {km|mi|nm}. The respective missile names are {name 1, name 2...}."
        }
        GrammarFamily::CustomPoi => {
            "Use the format: Custom POIs: [{Name} {lat} {lon} {range|min-max} {km|mi}]; one group per POI."
        }
        GrammarFamily::Trajectory => {
            "Use the format: Show launch trajectory from {Origin} to {Destination}."
        }
    }
}
