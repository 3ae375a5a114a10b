//! Shared in-crate test fixture: three objects, two needs.
//!
//! Mirrors the canonical scenario set: `active` is the bare `energy`
//! literal, `apartment` folds a present feature with an always-absent
//! one (`barking`), so its matrix column carries an UNKNOWN clause.

use std::collections::HashMap;

use crate::catalog::{Catalog, FeatureTable};
use crate::matrix::MatchMatrix;
use crate::needs::{Need, NeedSet, Question, QuestionBank};

pub(crate) struct Fixture {
    pub table: FeatureTable,
    pub catalog: Catalog,
    pub needs: NeedSet,
    pub questions: QuestionBank,
    pub matrix: MatchMatrix,
}

pub(crate) fn fixture() -> Fixture {
    let table = FeatureTable::from_ids(["energy", "apartment_ok", "barking"]).unwrap();

    let records = [
        ("a", &[("energy", 0.9), ("apartment_ok", 0.2)][..]),
        ("b", &[("energy", 0.5), ("apartment_ok", 0.7)][..]),
        ("c", &[("energy", 0.1), ("apartment_ok", 0.9)][..]),
    ];
    let catalog = Catalog::from_records(
        &table,
        records.iter().map(|(id, feats)| {
            (
                id.to_string(),
                feats
                    .iter()
                    .map(|(k, v)| (k.to_string(), *v))
                    .collect::<HashMap<_, _>>(),
            )
        }),
    )
    .unwrap();

    let needs = NeedSet::new(vec![
        Need::compile("active", "Active dog", "lifestyle", "energy", None, &table).unwrap(),
        Need::compile(
            "apartment",
            "Apartment fit",
            "housing",
            "apartment_ok & ~barking",
            None,
            &table,
        )
        .unwrap(),
    ])
    .unwrap();

    let questions = QuestionBank::new(
        [
            (
                "active".to_string(),
                vec![Question {
                    id: "active_q1".into(),
                    text: "Do you want a high-energy companion?".into(),
                    weight: 1.0,
                    style: None,
                    verification: None,
                }],
            ),
            (
                "apartment".to_string(),
                vec![Question {
                    id: "apartment_q1".into(),
                    text: "Do you live in an apartment?".into(),
                    weight: 1.0,
                    style: None,
                    verification: None,
                }],
            ),
        ],
        &needs,
    )
    .unwrap();

    let matrix = MatchMatrix::build(&catalog, &needs);

    Fixture {
        table,
        catalog,
        needs,
        questions,
        matrix,
    }
}
