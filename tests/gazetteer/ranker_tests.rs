//! Suggestion ranker tests.
//!
//! The ranker scores and sorts; it must behave differently from the
//! resolver's first-match cascade.

use rangecast_gazetteer::{DEFAULT_SUGGESTION_LIMIT, NameSet, rank, resolve_fuzzy};

fn countries() -> NameSet {
    NameSet::from_display([
        "Iran",
        "Iraq",
        "Ireland",
        "Korea, North",
        "Korea, South",
        "North Macedonia",
        "United States",
        "France",
    ])
    .unwrap()
}

#[test]
fn exact_match_scores_highest() {
    let set = countries();
    let suggestions = rank("iran", &set, DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(suggestions[0].display, "Iran");
    assert_eq!(suggestions[0].score, 100);
}

#[test]
fn prefix_beats_word_prefix_beats_containment() {
    let set = countries();
    let suggestions = rank("north", &set, DEFAULT_SUGGESTION_LIMIT);
    // "North Macedonia" starts with the term (80); the Koreas only have a
    // word starting with it (70).
    assert_eq!(suggestions[0].display, "North Macedonia");
    assert_eq!(suggestions[0].score, 80);
    assert_eq!(suggestions[1].score, 70);
}

#[test]
fn zero_scores_are_excluded() {
    let set = countries();
    let suggestions = rank("zzz", &set, DEFAULT_SUGGESTION_LIMIT);
    assert!(suggestions.is_empty());
}

#[test]
fn equal_scores_keep_insertion_order() {
    let set = countries();
    let suggestions = rank("ir", &set, DEFAULT_SUGGESTION_LIMIT);
    let prefix_hits: Vec<_> = suggestions
        .iter()
        .filter(|s| s.score == 80)
        .map(|s| s.display)
        .collect();
    assert_eq!(prefix_hits, ["Iran", "Iraq", "Ireland"]);
}

#[test]
fn limit_truncates_after_sorting() {
    let set = countries();
    let suggestions = rank("o", &set, 2);
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn empty_term_lists_the_first_entries_unscored() {
    let set = countries();
    let suggestions = rank("", &set, 3);
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0].display, "Iran");
    assert!(suggestions.iter().all(|s| s.score == 0));
}

#[test]
fn ranker_and_resolver_disagree_by_design() {
    // The resolver's prefix stage matches either way, so a term extending
    // an earlier short name stops there; the ranker scores the longer name
    // that starts with the term higher.
    let set = NameSet::from_display(["Congo", "Congo, Democratic Republic"]).unwrap();
    let resolved = resolve_fuzzy("congo, dem", &[&set]).unwrap();
    assert_eq!(resolved.canonical, "congo");
    let ranked = rank("congo, dem", &set, DEFAULT_SUGGESTION_LIMIT);
    assert_eq!(ranked[0].display, "Congo, Democratic Republic");
    assert_eq!(ranked[0].score, 80);
}
