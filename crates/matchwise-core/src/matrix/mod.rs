//! Formula evaluation and the precomputed object × need matrix.
//!
//! Evaluation is total on compiled inputs: a literal reads its feature
//! value (absent = UNKNOWN), a clause is the Łukasiewicz OR fold of its
//! literals, and a formula is the AND fold of its clauses. The matrix
//! stores every `(object, need)` evaluation once, need-major, so the
//! selector's per-need column sweeps stay contiguous.

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::formula::{CompiledFormula, CompiledLiteral};
use crate::fuzzy::Fuzzy;
use crate::needs::NeedSet;


/// Evaluate one literal against a dense feature array.
///
/// Present value `v` lifts to `(v, 1−v)`, negated to `(1−v, v)`;
/// absent features are UNKNOWN for either polarity.
#[inline]
fn eval_literal(lit: CompiledLiteral, values: &[Option<f32>]) -> Fuzzy {
    match values[lit.feature as usize] {
        Some(v) if lit.negated => Fuzzy::new(1.0 - v, v),
        Some(v) => Fuzzy::new(v, 1.0 - v),
        None => Fuzzy::UNKNOWN,
    }
}

/// Evaluate a compiled formula against a dense feature array.
///
/// The empty formula (a tautology) evaluates TRUE; an empty clause
/// evaluates FALSE. Both fall out of the fold identities.
pub fn evaluate(formula: &CompiledFormula, values: &[Option<f32>]) -> Fuzzy {
    Fuzzy::and_all(formula.clauses().iter().map(|clause| {
        Fuzzy::or_all(clause.iter().map(|&lit| eval_literal(lit, values)))
    }))
}

/// Dense `|catalog| × |needs|` table of fuzzy evaluations.
///
/// Layout is need-major: the full column of a need (one value per
/// object) is one contiguous slice. Built once at engine construction
/// and immutable afterwards; rebuilt only if catalog or needs change.
#[derive(Debug, Clone)]
pub struct MatchMatrix {
    n_objects: usize,
    n_needs: usize,
    values: Vec<Fuzzy>,
}

impl MatchMatrix {
    /// Evaluate every need formula against every catalog object.
    pub fn build(catalog: &Catalog, needs: &NeedSet) -> Self {
        let started = Instant::now();
        let n_objects = catalog.len();
        let n_needs = needs.len();

        let mut values = Vec::with_capacity(n_objects * n_needs);
        for need in needs.needs() {
            for object in catalog.objects() {
                values.push(evaluate(&need.formula, object.values()));
            }
        }

        debug!(
            objects = n_objects,
            needs = n_needs,
            elapsed_us = started.elapsed().as_micros() as u64,
            "match matrix built"
        );

        Self {
            n_objects,
            n_needs,
            values,
        }
    }

    /// Number of catalog objects (rows of a column).
    #[inline]
    pub fn n_objects(&self) -> usize {
        self.n_objects
    }

    /// Number of needs (columns).
    #[inline]
    pub fn n_needs(&self) -> usize {
        self.n_needs
    }

    /// Evaluation of one need on one object.
    ///
    /// # Panics
    /// Panics on out-of-bounds positions; positions come from the same
    /// catalog and needs set the matrix was built from.
    #[inline]
    pub fn value(&self, object: usize, need: usize) -> Fuzzy {
        self.values[need * self.n_objects + object]
    }

    /// Full column of a need: one evaluation per object, catalog order.
    #[inline]
    pub fn column(&self, need: usize) -> &[Fuzzy] {
        let start = need * self.n_objects;
        &self.values[start..start + self.n_objects]
    }
}
