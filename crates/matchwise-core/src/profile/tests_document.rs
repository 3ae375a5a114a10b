//! Profile serialization tests: round-trip, schema strictness, load
//! policies.

use super::*;
use crate::catalog::FeatureTable;
use crate::error::CoreError;
use crate::needs::{Need, NeedSet};

fn needs() -> NeedSet {
    let table = FeatureTable::from_ids(["energy", "apartment_ok"]).unwrap();
    NeedSet::new(vec![
        Need::compile("active", "Active", "lifestyle", "energy", None, &table).unwrap(),
        Need::compile("apartment", "Apartment", "housing", "apartment_ok", None, &table).unwrap(),
    ])
    .unwrap()
}

fn sample_profile() -> UserProfile {
    let mut profile = UserProfile::new();
    profile.add_answer("active", Answer::Yes, Some("Do you hike often?"));
    profile.add_answer("active", Answer::No, None);
    profile.mark_independent("apartment");
    profile
}

#[test]
fn test_round_trip_preserves_observable_state() {
    let profile = sample_profile();
    let json = profile.to_json().unwrap();
    let loaded = UserProfile::from_json(&json, &needs(), UnknownNeedPolicy::Reject).unwrap();

    assert_eq!(loaded.needs(), profile.needs());
    assert_eq!(loaded.independent(), profile.independent());
    assert_eq!(loaded.log(), profile.log());
}

#[test]
fn test_document_shape() {
    let doc = sample_profile().to_document();
    assert_eq!(doc.version, PROFILE_VERSION);
    assert_eq!(doc.answers.len(), 3);
    // Aggregate and independent set are not persisted.
    let json = serde_json::to_string(&doc).unwrap();
    assert!(!json.contains("aggregate"));
    assert!(!json.contains("independent"));
}

#[test]
fn test_wrong_version_rejected() {
    let json = r#"{"version": 2, "answers": []}"#;
    let err = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap_err();
    assert!(matches!(err, CoreError::Schema { .. }), "{err}");
}

#[test]
fn test_unknown_field_rejected() {
    let json = r#"{"version": 1, "answers": [], "aggregate": {}}"#;
    let err = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap_err();
    assert!(matches!(err, CoreError::Schema { .. }), "{err}");
}

#[test]
fn test_unknown_field_on_answer_rejected() {
    let json = r#"{"version": 1, "answers": [{"need_id": "active", "answer": "yes", "score": 3}]}"#;
    let err = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap_err();
    assert!(matches!(err, CoreError::Schema { .. }), "{err}");
}

#[test]
fn test_ext_area_tolerated_and_preserved() {
    let json = r#"{
        "version": 1,
        "answers": [{"need_id": "active", "answer": "yes", "ext": {"source": "import"}}],
        "ext": {"client": "cli"}
    }"#;
    let profile = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap();
    assert_eq!(
        profile.log()[0].ext.get("source"),
        Some(&serde_json::Value::String("import".into()))
    );
}

#[test]
fn test_unknown_need_reject_policy() {
    let json = r#"{"version": 1, "answers": [{"need_id": "guard", "answer": "yes"}]}"#;
    let err = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap_err();
    assert_eq!(err, CoreError::UnknownNeed("guard".into()));
}

#[test]
fn test_unknown_need_skip_policy() {
    let json = r#"{
        "version": 1,
        "answers": [
            {"need_id": "guard", "answer": "yes"},
            {"need_id": "active", "answer": "yes"}
        ]
    }"#;
    let profile = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Skip).unwrap();
    assert_eq!(profile.log().len(), 1);
    assert_eq!(profile.need("active"), Some(Fuzzy::TRUE));
}

#[test]
fn test_timestamps_survive_round_trip() {
    let json = r#"{
        "version": 1,
        "answers": [{"need_id": "active", "answer": "yes", "timestamp": "2026-07-01T12:00:00Z"}]
    }"#;
    let profile = UserProfile::from_json(json, &needs(), UnknownNeedPolicy::Reject).unwrap();
    let out = profile.to_json().unwrap();
    assert!(out.contains("2026-07-01T12:00:00Z"), "{out}");
}
