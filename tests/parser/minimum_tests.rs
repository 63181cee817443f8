//! Minimum distance grammar tests.

use crate::common::gazetteer;
use rangecast_foundation::MatchStatus;
use rangecast_parser::grammar::minimum;
use rangecast_parser::normalize::normalize;

fn parse(text: &str) -> minimum::MinimumParse {
    minimum::parse(&normalize(text), &gazetteer())
}

#[test]
fn canonical_command_fills_every_field() {
    let parse = parse("Calculate minimum distance between Korea, North and Japan.");
    assert!(parse.verb && parse.type_phrase && parse.preposition);
    assert_eq!(parse.connector, Some("and"));
    assert_eq!(parse.location_a.matched.as_deref(), Some("korea, north"));
    assert_eq!(parse.location_b.matched.as_deref(), Some("japan"));
    assert!(parse.flags.all_exact);
}

#[test]
fn compute_and_to_are_accepted_tokens() {
    let parse = parse("Compute min distance from Paris to Tokyo");
    assert!(parse.verb);
    assert!(parse.preposition);
    assert_eq!(parse.connector, Some("to"));
    assert!(parse.flags.all_exact);
}

#[test]
fn locations_draw_from_countries_and_cities() {
    let parse = parse("Calculate minimum distance between France and Tehran");
    assert_eq!(parse.location_a.matched.as_deref(), Some("france"));
    assert_eq!(parse.location_b.matched.as_deref(), Some("tehran"));
    assert!(parse.flags.all_exact);
}

#[test]
fn same_location_invalidates_even_when_both_exact() {
    let parse = parse("Calculate minimum distance between France and France");
    assert!(parse.same_location);
    assert_eq!(parse.location_a.status, MatchStatus::Exact);
    assert_eq!(parse.location_b.status, MatchStatus::Exact);
    assert!(!parse.flags.all_exact);
    assert!(!parse.flags.all_valid);
    assert!(parse.flags.partial_valid);
}

#[test]
fn same_place_via_fuzzy_resolution_still_counts() {
    // Both spellings resolve to the same canonical entry.
    let parse = parse("Calculate minimum distance between Japan and Japa");
    assert!(parse.same_location);
    assert!(!parse.flags.all_valid);
}

#[test]
fn unresolved_same_raw_text_counts_as_same_place() {
    let parse = parse("Calculate minimum distance between atlantis and atlantis");
    assert_eq!(parse.location_a.status, MatchStatus::Absent);
    assert!(parse.same_location);
    assert!(!parse.flags.all_valid);
}

#[test]
fn missing_connector_leaves_second_location_absent() {
    let parse = parse("Calculate minimum distance between France");
    assert_eq!(parse.connector, None);
    assert_eq!(parse.location_b.status, MatchStatus::Absent);
    assert!(!parse.flags.all_valid);
    assert!(parse.flags.partial_valid);
}
