//! Single range ring grammar tests.

use crate::common::gazetteer;
use rangecast_foundation::MatchStatus;
use rangecast_parser::grammar::single;
use rangecast_parser::normalize::normalize;

fn parse(text: &str) -> single::SingleParse {
    single::parse(&normalize(text), &gazetteer())
}

#[test]
fn canonical_command_fills_every_field() {
    let parse = parse("Generate a single range ring from Iran.");
    assert!(parse.verb);
    assert!(parse.type_phrase);
    assert!(parse.preposition);
    assert_eq!(parse.country.status, MatchStatus::Exact);
    assert_eq!(parse.country.matched.as_deref(), Some("iran"));
    assert!(parse.flags.all_exact);
    assert!(parse.flags.all_valid);
}

#[test]
fn for_works_as_the_preposition() {
    let parse = parse("Build a range ring for France");
    assert!(parse.preposition);
    assert!(parse.flags.all_exact);
}

#[test]
fn multi_word_country_resolves() {
    let parse = parse("Generate a range ring from Korea, North");
    assert_eq!(parse.country.matched.as_deref(), Some("korea, north"));
    assert!(parse.flags.all_exact);
}

#[test]
fn missing_verb_blocks_validity() {
    let parse = parse("a single range ring from Iran");
    assert!(!parse.verb);
    assert_eq!(parse.country.status, MatchStatus::Exact);
    assert!(!parse.flags.all_valid);
    assert!(parse.flags.partial_valid);
}

#[test]
fn partial_country_is_fuzzy() {
    let parse = parse("Generate a range ring from Isra");
    assert_eq!(parse.country.status, MatchStatus::Fuzzy);
    assert_eq!(parse.country.matched.as_deref(), Some("israel"));
    assert!(parse.flags.all_valid);
    assert!(!parse.flags.all_exact);
    assert!(parse.flags.has_fuzzy);
}

#[test]
fn type_phrase_without_country_is_partial_only() {
    let parse = parse("Generate a single range ring from");
    assert!(parse.preposition);
    assert_eq!(parse.country.status, MatchStatus::Absent);
    assert_eq!(parse.country.raw, None);
    assert!(!parse.flags.all_valid);
    assert!(parse.flags.partial_valid);
}
