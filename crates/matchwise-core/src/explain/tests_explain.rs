//! Explainer tests over the shared fixture.

use std::collections::HashMap;

use super::*;
use crate::test_fixtures::fixture;

fn user(entries: &[(&str, Fuzzy)]) -> HashMap<String, Fuzzy> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn test_pros_and_cons_partition() {
    let fx = fixture();
    let explainer = Explainer::new(&fx.catalog, &fx.needs, &fx.matrix);
    let u = user(&[("active", Fuzzy::TRUE), ("apartment", Fuzzy::TRUE)]);

    let explanations = explainer.explain(&u, Some(1), &ExplainConfig::default().with_windows(1, 1));
    assert_eq!(explanations.len(), 1);

    let top = &explanations[0];
    assert_eq!(top.object_id, "a");
    // For object a: active sim 0.9 (pro), apartment sim 0.1 (con).
    assert_eq!(top.pros.len(), 1);
    assert_eq!(top.pros[0].need_id, "active");
    assert!((top.pros[0].similarity - 0.9).abs() < 1e-6);
    assert_eq!(top.cons.len(), 1);
    assert_eq!(top.cons[0].need_id, "apartment");
    assert!((top.cons[0].similarity - 0.1).abs() < 1e-6);
    assert!(top.conflicts.is_empty());
}

#[test]
fn test_conflicted_need_surfaced_separately() {
    let fx = fixture();
    let explainer = Explainer::new(&fx.catalog, &fx.needs, &fx.matrix);
    let u = user(&[
        ("active", Fuzzy::new(0.5, 0.5)),
        ("apartment", Fuzzy::TRUE),
    ]);

    let explanations = explainer.explain(&u, None, &ExplainConfig::default());
    for explanation in &explanations {
        assert_eq!(explanation.conflicts.len(), 1);
        assert_eq!(explanation.conflicts[0].need_id, "active");
        for contribution in explanation.pros.iter().chain(&explanation.cons) {
            assert_ne!(contribution.need_id, "active");
        }
    }
}

#[test]
fn test_windows_do_not_overlap() {
    let fx = fixture();
    let explainer = Explainer::new(&fx.catalog, &fx.needs, &fx.matrix);
    let u = user(&[("active", Fuzzy::TRUE), ("apartment", Fuzzy::TRUE)]);

    // Windows larger than the contribution list: everything lands in
    // pros, nothing duplicates into cons.
    let explanations = explainer.explain(&u, Some(1), &ExplainConfig::default());
    let top = &explanations[0];
    assert_eq!(top.pros.len(), 2);
    assert!(top.cons.is_empty());
}

#[test]
fn test_empty_profile_has_no_contributions() {
    let fx = fixture();
    let explainer = Explainer::new(&fx.catalog, &fx.needs, &fx.matrix);
    let explanations = explainer.explain(&user(&[]), Some(3), &ExplainConfig::default());

    assert_eq!(explanations.len(), 3);
    for explanation in &explanations {
        assert!((explanation.score - 0.5).abs() < 1e-6);
        assert!(explanation.pros.is_empty());
        assert!(explanation.cons.is_empty());
        assert!(explanation.conflicts.is_empty());
    }
}

#[test]
fn test_explain_ranking_preserves_order() {
    let fx = fixture();
    let explainer = Explainer::new(&fx.catalog, &fx.needs, &fx.matrix);
    let matcher = Matcher::new(&fx.catalog, &fx.needs, &fx.matrix);
    let u = user(&[("active", Fuzzy::TRUE)]);

    let ranked = matcher.match_fast(&u, None, None);
    let explanations = explainer.explain_ranking(&ranked, &u, &ExplainConfig::default());
    let ids: Vec<&str> = explanations.iter().map(|e| e.object_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!((explanations[0].score - ranked[0].score).abs() < 1e-6);
}
