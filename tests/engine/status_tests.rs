//! Overall status precedence and family arbitration tests.

use rangecast_foundation::{GrammarFamily, UiStatus};
use rangecast_gazetteer::{Gazetteer, NameSet};
use rangecast_parser::CommandEngine;

fn engine() -> CommandEngine {
    CommandEngine::new(Gazetteer::new(
        NameSet::from_display(["Iran", "Israel", "Korea, North", "Japan", "France"]).unwrap(),
        NameSet::from_display(["Tehran", "Tel Aviv", "Pyongyang", "Tokyo"]).unwrap(),
    ))
}

#[test]
fn empty_input_reports_empty_and_no_partials() {
    let report = engine().parse("");
    assert_eq!(report.status, UiStatus::Empty);
    assert_eq!(report.family, None);
    for family in GrammarFamily::ALL {
        assert!(!report.parses.flags(family).partial_valid, "{family:?}");
    }
}

#[test]
fn whitespace_only_counts_as_empty() {
    let report = engine().parse(" \n\t ");
    assert_eq!(report.status, UiStatus::Empty);
}

#[test]
fn verbless_unmatched_text_reads_as_a_question() {
    let report = engine().parse("what is the capital of France called");
    assert_eq!(report.status, UiStatus::Query);
    assert_eq!(report.family, None);
}

#[test]
fn bare_coordinates_in_prose_read_as_a_question() {
    let report = engine().parse("my meeting is at 40 70");
    assert_eq!(report.family, None);
    assert_eq!(report.status, UiStatus::Query);
}

#[test]
fn verbed_unmatched_text_is_unrecognized() {
    let report = engine().parse("generate something I have no grammar for");
    assert_eq!(report.status, UiStatus::Unrecognized);
    assert_eq!(report.family, None);
}

#[test]
fn specificity_breaks_ties_between_detected_families() {
    // "minimum range ring" also contains "range ring"; Minimum outranks
    // the suppressed Single family.
    let report = engine().parse("calculate minimum range ring between Iran and Japan");
    assert_eq!(report.family, Some(GrammarFamily::Minimum));
    assert_eq!(report.status, UiStatus::Valid);
}

#[test]
fn detected_type_phrase_outranks_slot_only_partials() {
    // The reverse grammar sees "from iran" and resolves a country, but
    // only the single family's type phrase is present.
    let report = engine().parse("generate a range ring from Iran");
    assert_eq!(report.family, Some(GrammarFamily::Single));
    assert_eq!(report.status, UiStatus::Valid);
}

#[test]
fn valid_fuzzy_attention_and_typing_map_from_slot_states() {
    let engine = engine();

    let valid = engine.parse("generate a range ring from Iran");
    assert_eq!(valid.status, UiStatus::Valid);

    let fuzzy = engine.parse("generate a range ring from Ira");
    assert_eq!(fuzzy.status, UiStatus::Fuzzy);

    let attention = engine.parse("generate a range ring from Atlantis");
    assert_eq!(attention.status, UiStatus::Attention);

    let typing = engine.parse("generate a range ring from");
    assert_eq!(typing.status, UiStatus::Typing);
}

#[test]
fn typing_gets_the_redirect_hint_attention_gets_the_format() {
    let engine = engine();

    let typing = engine.parse("generate a reverse range ring");
    assert_eq!(typing.status, UiStatus::Typing);
    assert!(typing.hint.unwrap().contains("Reverse Range Ring"));

    let attention = engine.parse("generate a reverse range ring from Atlantis against Gotham");
    assert_eq!(attention.status, UiStatus::Attention);
    assert!(attention.hint.unwrap().starts_with("Use the format"));
}

#[test]
fn same_location_minimum_is_attention_not_valid() {
    let report = engine().parse("calculate minimum distance between France and France");
    assert_eq!(report.family, Some(GrammarFamily::Minimum));
    assert_eq!(report.status, UiStatus::Attention);
}
