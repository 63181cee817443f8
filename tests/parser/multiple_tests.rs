//! Multiple range rings grammar tests.

use crate::common::gazetteer;
use rangecast_foundation::{DistanceUnit, MatchStatus};
use rangecast_parser::grammar::multiple;
use rangecast_parser::normalize::normalize;

fn parse(text: &str) -> multiple::MultipleParse {
    multiple::parse(&normalize(text), &gazetteer())
}

#[test]
fn canonical_command_fills_every_field() {
    let parse = parse(
        "Generate multiple range rings from Iran at 300, 600 and 900 km. \
         The respective missile names are Fateh, Zolfaghar and Khorramshahr.",
    );
    assert!(parse.verb && parse.type_phrase && parse.preposition && parse.at_marker);
    assert_eq!(parse.country.matched.as_deref(), Some("iran"));
    assert_eq!(parse.distances, vec![300.0, 600.0, 900.0]);
    assert_eq!(parse.unit, Some(DistanceUnit::Kilometers));
    assert_eq!(parse.missile_names.len(), 3);
    assert_eq!(parse.missile_status, MatchStatus::Exact);
    assert!(parse.flags.all_exact);
}

#[test]
fn two_names_for_three_rings_degrades_to_fuzzy() {
    let parse = parse(
        "Generate multiple range rings from Iran at 300, 600 and 900 km. \
         The respective missile names are Fateh and Zolfaghar.",
    );
    assert_eq!(parse.missile_names.len(), 2);
    assert_eq!(parse.missile_status, MatchStatus::Fuzzy);
    assert!(parse.flags.has_fuzzy);
    assert!(!parse.flags.all_exact);
    assert!(parse.flags.all_valid);
}

#[test]
fn names_are_optional() {
    let parse = parse("Generate multiple range rings from Korea, North at 500, 1000, 1500 km");
    assert_eq!(parse.missile_status, MatchStatus::Absent);
    assert!(parse.flags.all_exact);
}

#[test]
fn alternate_units_are_recognized() {
    let mi = parse("Generate multiple rings from Iran at 100, 200 mi");
    assert_eq!(mi.unit, Some(DistanceUnit::Miles));
    let nm = parse("Generate multiple rings from Iran at 100, 200 nm");
    assert_eq!(nm.unit, Some(DistanceUnit::NauticalMiles));
}

#[test]
fn distances_stop_at_the_sentence_period() {
    let parse = parse(
        "Generate multiple range rings from Iran at 300 km. \
         The respective missile names are Fateh.",
    );
    // "300" only; digits in the names sentence must not leak in.
    assert_eq!(parse.distances, vec![300.0]);
}

#[test]
fn decimal_points_are_not_sentence_periods() {
    let parse = parse("Generate multiple range rings from Iran at 1.5, 2.75 km");
    assert_eq!(parse.distances, vec![1.5, 2.75]);
    assert!(parse.flags.all_exact);
}

#[test]
fn missing_distances_or_unit_block_validity() {
    let no_unit = parse("Generate multiple range rings from Iran at 300, 600");
    assert!(!no_unit.flags.all_valid);
    assert!(no_unit.flags.partial_valid);

    let no_numbers = parse("Generate multiple range rings from Iran at km");
    assert!(no_numbers.distances.is_empty());
    assert!(!no_numbers.flags.all_valid);
}

#[test]
fn name_list_is_found_anywhere_in_the_text() {
    let parse = parse(
        "The respective missile names are Fateh and Zolfaghar. \
         Generate multiple range rings from Iran at 300, 600 km.",
    );
    assert_eq!(parse.missile_names, ["fateh", "zolfaghar"]);
    assert_eq!(parse.missile_status, MatchStatus::Exact);
}
