//! Validity flag aggregation over parsed slots.

use rangecast_foundation::{AggregateFlags, MatchStatus, Slot};

/// Folds slot resolution states into aggregate validity flags.
///
/// `tokens_present` marks whether the family's non-slot requirements were
/// met (verb, prepositions, literal markers). `type_phrase` marks whether
/// the family's type phrase itself appeared; when it did, a partially
/// filled command still belongs to the family even though it is not valid.
#[must_use]
pub fn aggregate(tokens_present: bool, type_phrase: bool, slots: &[&Slot]) -> AggregateFlags {
    let all_resolved = slots.iter().all(|slot| slot.is_resolved());
    let all_exact = tokens_present
        && all_resolved
        && slots.iter().all(|slot| slot.status == MatchStatus::Exact);
    let all_valid = tokens_present && all_resolved;
    let has_fuzzy = slots.iter().any(|slot| slot.status == MatchStatus::Fuzzy);

    AggregateFlags {
        all_exact,
        all_valid,
        has_fuzzy,
        partial_valid: type_phrase || slots.iter().any(|slot| slot.is_resolved()),
    }
}

/// Whether any slot carries raw text the resolver rejected outright.
#[must_use]
pub fn any_rejected(slots: &[&Slot]) -> bool {
    slots.iter().any(|slot| slot.is_rejected())
}
