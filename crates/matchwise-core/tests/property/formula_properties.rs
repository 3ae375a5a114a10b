//! Randomized formula-pipeline properties: re-serialization stability,
//! boolean agreement of the CNF rewrite, compile-time checks.

use matchwise_core::formula::{parse, Cnf, CompiledFormula, Expr};
use matchwise_core::matrix::evaluate;
use matchwise_core::{CoreError, FeatureTable, Fuzzy};
use proptest::prelude::*;

const VARS: [&str; 4] = ["a", "b", "c", "d"];

fn table() -> FeatureTable {
    FeatureTable::from_ids(VARS).unwrap()
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop::sample::select(VARS.to_vec()).prop_map(Expr::var);
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Not(Box::new(e))),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| Expr::And(Box::new(a), Box::new(b))),
            (inner.clone(), inner).prop_map(|(a, b)| Expr::Or(Box::new(a), Box::new(b))),
        ]
    })
}

/// Direct evaluation of the parse tree, bypassing the CNF rewrite.
fn eval_expr(expr: &Expr, values: &[f32; 4]) -> Fuzzy {
    match expr {
        Expr::Var(name) => {
            let i = VARS.iter().position(|v| v == name).unwrap();
            Fuzzy::from_degree(values[i])
        }
        Expr::Not(e) => eval_expr(e, values).not(),
        Expr::And(a, b) => eval_expr(a, values).and(eval_expr(b, values)),
        Expr::Or(a, b) => eval_expr(a, values).or(eval_expr(b, values)),
    }
}

fn eval_cnf(cnf: &Cnf, values: &[f32; 4]) -> Fuzzy {
    let table = table();
    let compiled = CompiledFormula::compile(cnf, &table).unwrap();
    let dense: Vec<Option<f32>> = values.iter().map(|&v| Some(v)).collect();
    evaluate(&compiled, &dense)
}

proptest! {
    // Expression Display reparses to the same tree.
    #[test]
    fn expr_display_round_trips(expr in arb_expr()) {
        let reparsed = parse(&expr.to_string()).unwrap();
        prop_assert_eq!(expr, reparsed);
    }

    // The CNF re-serialization parses back to the identical clause set
    // and therefore evaluates identically on every input.
    #[test]
    fn cnf_reserialization_is_stable(
        expr in arb_expr(),
        values in prop::array::uniform4(0.0f32..=1.0),
    ) {
        let cnf = Cnf::from_expr(&expr);
        prop_assume!(!cnf.is_tautology());

        let round = Cnf::parse(&cnf.to_string()).unwrap();
        prop_assert_eq!(&cnf, &round);

        let a = eval_cnf(&cnf, &values);
        let b = eval_cnf(&round, &values);
        prop_assert!((a.t - b.t).abs() < 1e-5 && (a.f - b.f).abs() < 1e-5);
    }

    // On crisp 0/1 inputs the CNF rewrite agrees with the source tree:
    // distribution and De Morgan are boolean-exact.
    #[test]
    fn cnf_agrees_on_boolean_inputs(expr in arb_expr(), bits in prop::array::uniform4(any::<bool>())) {
        let values = bits.map(|b| if b { 1.0f32 } else { 0.0 });
        let direct = eval_expr(&expr, &values);
        let cnf = Cnf::from_expr(&expr);
        let via_cnf = if cnf.is_tautology() {
            Fuzzy::TRUE
        } else {
            eval_cnf(&cnf, &values)
        };
        prop_assert_eq!(direct, via_cnf);
    }

    // Compilation never panics and fails only on undeclared features.
    #[test]
    fn compile_is_total_on_declared_vars(expr in arb_expr()) {
        let cnf = Cnf::from_expr(&expr);
        prop_assert!(CompiledFormula::compile(&cnf, &table()).is_ok());
    }
}

#[test]
fn unknown_feature_fails_compilation() {
    let cnf = Cnf::parse("a & mystery").unwrap();
    let err = CompiledFormula::compile(&cnf, &table()).unwrap_err();
    assert_eq!(err, CoreError::UnknownFeature("mystery".into()));
}
