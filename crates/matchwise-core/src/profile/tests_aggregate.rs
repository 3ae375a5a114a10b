//! Aggregation tests: dilution, independent override, cache/derivation
//! agreement.

use super::*;

#[test]
fn test_empty_profile() {
    let profile = UserProfile::new();
    assert!(profile.is_empty());
    assert!(profile.needs().is_empty());
    assert!(profile.answered_need_ids().is_empty());
}

#[test]
fn test_single_yes() {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, Some("Do you hike often?"));
    assert_eq!(profile.need("active"), Some(Fuzzy::TRUE));
    assert_eq!(profile.log().len(), 1);
    assert_eq!(profile.log()[0].question.as_deref(), Some("Do you hike often?"));
}

#[test]
fn test_yes_no_counts() {
    // 2 yes, 1 no, no unknowns: (2/3, 1/3).
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, None);
    profile.add_answer("active", Answer::Yes, None);
    profile.add_answer("active", Answer::No, None);
    let v = profile.need("active").unwrap();
    assert!((v.t - 2.0 / 3.0).abs() < 1e-6);
    assert!((v.f - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_unknown_dilutes_but_does_not_refute() {
    // 1 yes, 1 unknown: (1/2, 0).
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, None);
    profile.add_answer("active", Answer::Unknown, None);
    let v = profile.need("active").unwrap();
    assert!((v.t - 0.5).abs() < 1e-6);
    assert_eq!(v.f, 0.0);
}

#[test]
fn test_only_unknown_is_unknown_but_covered() {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Unknown, None);
    assert_eq!(profile.need("active"), Some(Fuzzy::UNKNOWN));
    assert!(profile.answered_need_ids().contains("active"));
}

#[test]
fn test_conflicting_answers() {
    // yes then no: (0.5, 0.5), the conflict-ward midpoint.
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::No, None);
    profile.add_answer("active", Answer::Yes, None);
    assert_eq!(profile.need("active"), Some(Fuzzy::new(0.5, 0.5)));
}

#[test]
fn test_independent_overrides_aggregate() {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, None);
    profile.mark_independent("active");

    assert_eq!(profile.need("active"), None);
    assert!(profile.is_independent("active"));
    assert!(profile.answered_need_ids().contains("active"));
}

#[test]
fn test_yes_after_independent_reenters_fresh() {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, None);
    profile.add_answer("active", Answer::No, None);
    profile.mark_independent("active");
    profile.add_answer("active", Answer::Yes, None);

    // Counting restarted at the re-entering answer: Y+N = 1.
    assert_eq!(profile.need("active"), Some(Fuzzy::TRUE));
    assert!(!profile.is_independent("active"));
}

#[test]
fn test_unknown_while_independent_is_log_only() {
    let mut profile = UserProfile::new();
    profile.mark_independent("active");
    profile.add_answer("active", Answer::Unknown, None);

    assert!(profile.is_independent("active"));
    assert_eq!(profile.need("active"), None);
    assert_eq!(profile.log().len(), 2);

    // Re-entry starts from the yes, not from the interleaved unknown.
    profile.add_answer("active", Answer::Yes, None);
    assert_eq!(profile.need("active"), Some(Fuzzy::TRUE));
}

#[test]
fn test_aggregate_and_independent_disjoint() {
    let mut profile = UserProfile::new();
    profile.add_answer("a", Answer::Yes, None);
    profile.mark_independent("b");
    profile.add_answer("c", Answer::Unknown, None);
    profile.mark_independent("a");
    profile.add_answer("b", Answer::No, None);

    for id in profile.needs().keys() {
        assert!(!profile.is_independent(id), "{id} in both caches");
    }
}

#[test]
fn test_incremental_matches_pure_derivation() {
    let mut profile = UserProfile::new();
    let script = [
        ("a", Answer::Yes),
        ("b", Answer::No),
        ("a", Answer::Unknown),
        ("b", Answer::Independent),
        ("c", Answer::Unknown),
        ("b", Answer::Yes),
        ("a", Answer::No),
        ("c", Answer::Independent),
    ];
    for (need, answer) in script {
        profile.add_answer(need, answer, None);
    }

    let (aggregate, independent) = aggregate_log(profile.log());
    assert_eq!(&aggregate, profile.needs());
    assert_eq!(&independent, profile.independent());
}

#[test]
fn test_log_is_append_only() {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, None);
    profile.mark_independent("active");
    profile.add_answer("active", Answer::No, None);

    // Every mutation appended; nothing was edited in place.
    let answers: Vec<Answer> = profile.log().iter().map(|r| r.answer).collect();
    assert_eq!(answers, vec![Answer::Yes, Answer::Independent, Answer::No]);
}
