//! Parser tests: precedence, associativity, and error positions.

use crate::error::CoreError;

use super::ast::Expr;
use super::parser::parse;

fn var(name: &str) -> Expr {
    Expr::var(name)
}

#[test]
fn test_single_identifier() {
    assert_eq!(parse("energy").unwrap(), var("energy"));
    assert_eq!(parse("  energy  ").unwrap(), var("energy"));
    assert_eq!(parse("_x9").unwrap(), var("_x9"));
}

#[test]
fn test_and_binds_tighter_than_or() {
    // a | b & c  ==  a | (b & c)
    let expr = parse("a | b & c").unwrap();
    assert_eq!(
        expr,
        Expr::Or(
            Box::new(var("a")),
            Box::new(Expr::And(Box::new(var("b")), Box::new(var("c")))),
        )
    );
}

#[test]
fn test_not_binds_tightest() {
    // ~a & b  ==  (~a) & b
    let expr = parse("~a & b").unwrap();
    assert_eq!(
        expr,
        Expr::And(
            Box::new(Expr::Not(Box::new(var("a")))),
            Box::new(var("b")),
        )
    );
}

#[test]
fn test_left_associativity() {
    // a & b & c  ==  (a & b) & c
    let expr = parse("a & b & c").unwrap();
    assert_eq!(
        expr,
        Expr::And(
            Box::new(Expr::And(Box::new(var("a")), Box::new(var("b")))),
            Box::new(var("c")),
        )
    );
}

#[test]
fn test_parens_override_precedence() {
    let expr = parse("(a | b) & c").unwrap();
    assert_eq!(
        expr,
        Expr::And(
            Box::new(Expr::Or(Box::new(var("a")), Box::new(var("b")))),
            Box::new(var("c")),
        )
    );
}

#[test]
fn test_double_negation_parses() {
    let expr = parse("~~a").unwrap();
    assert_eq!(expr, Expr::Not(Box::new(Expr::Not(Box::new(var("a"))))));
}

#[test]
fn test_display_round_trip() {
    for src in [
        "a",
        "~a",
        "a & b",
        "a | b & c",
        "(a | b) & c",
        "~(a & b) | c",
        "apartment_ok & ~barking",
    ] {
        let expr = parse(src).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed, "display round-trip failed for `{src}`");
    }
}

#[test]
fn test_empty_input_fails() {
    let err = parse("").unwrap_err();
    assert!(matches!(err, CoreError::Parse { position: 0, .. }));
}

#[test]
fn test_unexpected_character_position() {
    let err = parse("a & 3x").unwrap_err();
    assert!(matches!(err, CoreError::Parse { position: 4, .. }), "{err}");
}

#[test]
fn test_unclosed_paren() {
    let err = parse("(a | b").unwrap_err();
    match err {
        CoreError::Parse { position, reason } => {
            assert_eq!(position, 6);
            assert!(reason.contains("unclosed"), "{reason}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_trailing_input() {
    let err = parse("a b").unwrap_err();
    match err {
        CoreError::Parse { position, reason } => {
            assert_eq!(position, 2);
            assert!(reason.contains("trailing"), "{reason}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_dangling_operator() {
    let err = parse("a &").unwrap_err();
    assert!(matches!(err, CoreError::Parse { position: 3, .. }), "{err}");
}

#[test]
fn test_variables_in_order() {
    let expr = parse("b & a | b & c").unwrap();
    assert_eq!(expr.variables(), vec!["b", "a", "c"]);
}
