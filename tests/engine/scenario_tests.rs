//! End-to-end command scenarios through the full engine pipeline.

use rangecast_foundation::{GrammarFamily, MatchStatus, PoiStatus, UiStatus};
use rangecast_gazetteer::{Gazetteer, NameSet};
use rangecast_parser::CommandEngine;

fn engine() -> CommandEngine {
    CommandEngine::new(Gazetteer::new(
        NameSet::from_display(["Iran", "Israel", "Korea, North", "Japan", "France"]).unwrap(),
        NameSet::from_display(["Tehran", "Tel Aviv", "Pyongyang", "Tokyo", "Paris"]).unwrap(),
    ))
}

#[test]
fn reverse_ring_with_origin_and_target() {
    let report = engine().parse("Generate a reverse range ring from Iran against Tel Aviv.");
    assert_eq!(report.family, Some(GrammarFamily::Reverse));
    assert_eq!(report.status, UiStatus::Valid);
    assert_eq!(report.parses.reverse.country.matched.as_deref(), Some("iran"));
    assert_eq!(
        report.parses.reverse.city.matched.as_deref(),
        Some("tel aviv")
    );
}

#[test]
fn minimum_distance_between_the_same_country_needs_attention() {
    let report = engine().parse("Calculate minimum distance between France and France");
    assert_eq!(report.family, Some(GrammarFamily::Minimum));
    assert_eq!(report.status, UiStatus::Attention);
    assert!(report.parses.minimum.same_location);
}

#[test]
fn multiple_rings_with_matching_names_are_exact() {
    let report = engine().parse(
        "Generate multiple range rings from Iran at 300, 600, 900 km. \
         Missile names are Alpha, Beta and Gamma.",
    );
    assert_eq!(report.family, Some(GrammarFamily::Multiple));
    assert_eq!(report.status, UiStatus::Valid);
    let parse = &report.parses.multiple;
    assert_eq!(parse.distances, vec![300.0, 600.0, 900.0]);
    assert_eq!(parse.missile_names.len(), 3);
    assert_eq!(parse.missile_status, MatchStatus::Exact);
}

#[test]
fn multiple_rings_with_a_name_count_mismatch_are_fuzzy() {
    let report = engine().parse(
        "Generate multiple range rings from Iran at 300, 600, 900 km. \
         Missile names are Alpha and Beta.",
    );
    assert_eq!(report.family, Some(GrammarFamily::Multiple));
    assert_eq!(report.status, UiStatus::Fuzzy);
    assert_eq!(report.parses.multiple.missile_status, MatchStatus::Fuzzy);
}

#[test]
fn custom_poi_group_parses_exact() {
    let report = engine().parse("Custom POI: Tehran Site 35.7 51.4 300-1200 km");
    assert_eq!(report.family, Some(GrammarFamily::CustomPoi));
    assert_eq!(report.status, UiStatus::Valid);
    let pois = &report.parses.custom_poi.pois;
    assert_eq!(pois.len(), 1);
    assert_eq!(pois[0].name, "Tehran Site");
    assert_eq!(pois[0].status, PoiStatus::Exact);
}

#[test]
fn broken_poi_group_does_not_poison_its_siblings() {
    let report = engine().parse("Custom POI: [Alpha 35.7 51.4 800 km] [Beta 40 -70]");
    assert_eq!(report.family, Some(GrammarFamily::CustomPoi));
    assert_eq!(report.status, UiStatus::Attention);
    let pois = &report.parses.custom_poi.pois;
    assert_eq!(pois.len(), 2);
    assert_eq!(pois[0].status, PoiStatus::Exact);
    assert_eq!(pois[1].status, PoiStatus::Error);
}

#[test]
fn trajectory_between_two_cities() {
    let report = engine().parse("Show launch trajectory from Pyongyang to Tokyo");
    assert_eq!(report.family, Some(GrammarFamily::Trajectory));
    assert_eq!(report.status, UiStatus::Valid);
    assert_eq!(
        report.parses.trajectory.origin.matched.as_deref(),
        Some("pyongyang")
    );
    assert_eq!(
        report.parses.trajectory.destination.matched.as_deref(),
        Some("tokyo")
    );
}

#[test]
fn single_ring_for_a_partial_country_is_fuzzy() {
    let report = engine().parse("Generate a single range ring from North");
    assert_eq!(report.family, Some(GrammarFamily::Single));
    assert_eq!(report.status, UiStatus::Fuzzy);
    assert_eq!(
        report.parses.single.country.matched.as_deref(),
        Some("korea, north")
    );
}

#[test]
fn every_report_carries_a_message() {
    let engine = engine();
    for text in [
        "",
        "generate",
        "generate a range ring from Iran",
        "what time is it",
        "generate nonsense entirely",
    ] {
        let report = engine.parse(text);
        assert!(!report.message.is_empty(), "{text:?}");
    }
}
