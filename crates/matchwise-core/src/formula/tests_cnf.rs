//! CNF normalization tests: distribution, De Morgan, reduction rules.

use super::cnf::{Cnf, Literal};

fn clause_sets(cnf: &Cnf) -> Vec<Vec<(String, bool)>> {
    cnf.clauses()
        .iter()
        .map(|c| {
            c.literals()
                .iter()
                .map(|l| (l.feature.clone(), l.negated))
                .collect()
        })
        .collect()
}

fn lit(name: &str) -> (String, bool) {
    (name.to_string(), false)
}

fn neg(name: &str) -> (String, bool) {
    (name.to_string(), true)
}

#[test]
fn test_and_of_or_is_already_cnf() {
    // A & (B | C) stays as two clauses: (A)(B|C)
    let cnf = Cnf::parse("a & (b | c)").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("a")], vec![lit("b"), lit("c")]]);
}

#[test]
fn test_or_distributes_over_and() {
    // A | (B & C)  =>  (A|B) & (A|C)
    let cnf = Cnf::parse("a | (b & c)").unwrap();
    assert_eq!(
        clause_sets(&cnf),
        vec![vec![lit("a"), lit("b")], vec![lit("a"), lit("c")]]
    );
}

#[test]
fn test_de_morgan_on_and() {
    // ~(a & b)  =>  single clause (~a | ~b)
    let cnf = Cnf::parse("~(a & b)").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![neg("a"), neg("b")]]);
}

#[test]
fn test_de_morgan_on_or() {
    // ~(a | b)  =>  ~a & ~b
    let cnf = Cnf::parse("~(a | b)").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![neg("a")], vec![neg("b")]]);
}

#[test]
fn test_double_negation_cancels() {
    let cnf = Cnf::parse("~~a").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("a")]]);
}

#[test]
fn test_duplicate_literals_collapse() {
    let cnf = Cnf::parse("a | a").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("a")]]);
}

#[test]
fn test_tautological_clause_dropped() {
    // a | ~a is TRUE; the whole formula reduces to the empty AND.
    let cnf = Cnf::parse("a | ~a").unwrap();
    assert!(cnf.is_tautology());
    assert!(cnf.clauses().is_empty());
}

#[test]
fn test_tautological_clause_dropped_inside_conjunction() {
    let cnf = Cnf::parse("(a | ~a) & b").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("b")]]);
}

#[test]
fn test_duplicate_clauses_collapse() {
    let cnf = Cnf::parse("a & a").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("a")]]);

    let cnf = Cnf::parse("(a | b) & (b | a)").unwrap();
    assert_eq!(clause_sets(&cnf), vec![vec![lit("a"), lit("b")]]);
}

#[test]
fn test_nested_distribution() {
    // (a & b) | (c & d) => (a|c)(a|d)(b|c)(b|d)
    let cnf = Cnf::parse("(a & b) | (c & d)").unwrap();
    assert_eq!(
        clause_sets(&cnf),
        vec![
            vec![lit("a"), lit("c")],
            vec![lit("a"), lit("d")],
            vec![lit("b"), lit("c")],
            vec![lit("b"), lit("d")],
        ]
    );
}

#[test]
fn test_display_reparses_to_same_cnf() {
    for src in [
        "a",
        "~a & b",
        "a | (b & ~c)",
        "~(a | b) & (c | d)",
        "apartment_ok & ~barking",
    ] {
        let cnf = Cnf::parse(src).unwrap();
        let round = Cnf::parse(&cnf.to_string()).unwrap();
        assert_eq!(cnf, round, "CNF display round-trip failed for `{src}`");
    }
}

#[test]
fn test_features_in_clause_order() {
    let cnf = Cnf::parse("b & (a | b) & c").unwrap();
    assert_eq!(cnf.features(), vec!["b", "a", "c"]);
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::new("x", false).to_string(), "x");
    assert_eq!(Literal::new("x", true).to_string(), "~x");
}
