//! Example-based algebra tests on the canonical corners.
//!
//! Randomized laws over the full [0,1]² square live in
//! `tests/property/algebra_properties.rs`.

use super::*;

const CORNERS: [Fuzzy; 4] = [Fuzzy::TRUE, Fuzzy::FALSE, Fuzzy::UNKNOWN, Fuzzy::CONFLICT];

#[test]
fn test_not_truth_table() {
    assert_eq!(Fuzzy::TRUE.not(), Fuzzy::FALSE);
    assert_eq!(Fuzzy::FALSE.not(), Fuzzy::TRUE);
    // UNKNOWN and CONFLICT are fixed points of negation.
    assert_eq!(Fuzzy::UNKNOWN.not(), Fuzzy::UNKNOWN);
    assert_eq!(Fuzzy::CONFLICT.not(), Fuzzy::CONFLICT);
}

#[test]
fn test_and_boundary_agreement() {
    // On {TRUE, FALSE} the connectives coincide with 2-valued logic.
    assert_eq!(Fuzzy::TRUE.and(Fuzzy::TRUE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::TRUE.and(Fuzzy::FALSE), Fuzzy::FALSE);
    assert_eq!(Fuzzy::FALSE.and(Fuzzy::TRUE), Fuzzy::FALSE);
    assert_eq!(Fuzzy::FALSE.and(Fuzzy::FALSE), Fuzzy::FALSE);
}

#[test]
fn test_or_boundary_agreement() {
    assert_eq!(Fuzzy::TRUE.or(Fuzzy::TRUE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::TRUE.or(Fuzzy::FALSE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::FALSE.or(Fuzzy::TRUE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::FALSE.or(Fuzzy::FALSE), Fuzzy::FALSE);
}

#[test]
fn test_unknown_absorbs_nothing() {
    // UNKNOWN contributes no evidence in either direction.
    assert_eq!(Fuzzy::TRUE.and(Fuzzy::UNKNOWN), Fuzzy::new(0.0, 0.0));
    assert_eq!(Fuzzy::TRUE.or(Fuzzy::UNKNOWN), Fuzzy::TRUE);
    assert_eq!(Fuzzy::FALSE.or(Fuzzy::UNKNOWN), Fuzzy::new(0.0, 0.0));
    assert_eq!(Fuzzy::FALSE.and(Fuzzy::UNKNOWN), Fuzzy::FALSE);
}

#[test]
fn test_implies_and_iff_corners() {
    assert_eq!(Fuzzy::TRUE.implies(Fuzzy::FALSE), Fuzzy::FALSE);
    assert_eq!(Fuzzy::FALSE.implies(Fuzzy::TRUE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::TRUE.iff(Fuzzy::TRUE), Fuzzy::TRUE);
    assert_eq!(Fuzzy::TRUE.iff(Fuzzy::FALSE), Fuzzy::FALSE);
    assert_eq!(Fuzzy::FALSE.iff(Fuzzy::FALSE), Fuzzy::TRUE);
}

#[test]
fn test_fold_identities() {
    assert_eq!(Fuzzy::and_all([]), Fuzzy::TRUE);
    assert_eq!(Fuzzy::or_all([]), Fuzzy::FALSE);
    for x in CORNERS {
        assert_eq!(Fuzzy::and_all([x]), x);
        assert_eq!(Fuzzy::or_all([x]), x);
    }
}

#[test]
fn test_fold_matches_closed_form() {
    // Clause fold: t = min(1, Σt), f = max(0, Σf − m + 1).
    let vals = [Fuzzy::new(0.3, 0.7), Fuzzy::new(0.4, 0.6), Fuzzy::new(0.2, 0.8)];
    let or = Fuzzy::or_all(vals);
    assert!((or.t - 0.9).abs() < 1e-6);
    assert!((or.f - (0.7 + 0.6 + 0.8 - 2.0)).abs() < 1e-6);

    // Formula fold: t = max(0, Σt − n + 1), f = min(1, Σf).
    let and = Fuzzy::and_all(vals);
    assert!((and.t - 0.0).abs() < 1e-6);
    assert!((and.f - 1.0).abs() < 1e-6);
}

#[test]
fn test_from_degree_is_sharp() {
    let v = Fuzzy::from_degree(0.9);
    assert!((v.t - 0.9).abs() < 1e-6);
    assert!((v.f - 0.1).abs() < 1e-6);
}

#[test]
#[should_panic(expected = "fuzzy components out of range")]
fn test_out_of_range_panics() {
    let _ = Fuzzy::new(1.2, 0.0);
}

#[test]
fn test_knowledge_components_sum_to_one_on_corners() {
    for x in CORNERS {
        let sum = x.truth() + x.falsity() + x.unknown() + x.conflict();
        assert!((sum - 1.0).abs() < 1e-6, "components of {x} sum to {sum}");
    }
}

#[test]
fn test_dominant_state_on_corners() {
    assert_eq!(Fuzzy::TRUE.dominant_state(), FuzzyState::True);
    assert_eq!(Fuzzy::FALSE.dominant_state(), FuzzyState::False);
    assert_eq!(Fuzzy::UNKNOWN.dominant_state(), FuzzyState::Unknown);
    assert_eq!(Fuzzy::CONFLICT.dominant_state(), FuzzyState::Conflict);
}

#[test]
fn test_dominant_state_off_corner() {
    assert_eq!(Fuzzy::new(0.9, 0.1).dominant_state(), FuzzyState::True);
    assert_eq!(Fuzzy::new(0.1, 0.8).dominant_state(), FuzzyState::False);
    assert_eq!(Fuzzy::new(0.1, 0.1).dominant_state(), FuzzyState::Unknown);
    assert_eq!(Fuzzy::new(0.9, 0.9).dominant_state(), FuzzyState::Conflict);
}
