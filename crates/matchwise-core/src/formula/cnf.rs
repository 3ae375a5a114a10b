//! String-level conjunctive normal form.
//!
//! Normalization rules:
//! - `~` is pushed down to literals by De Morgan
//! - `|` is distributed over `&` until the top level is AND-of-ORs
//! - duplicate literals inside a clause collapse
//! - a clause containing both `x` and `~x` is a tautology and is dropped
//! - duplicate clauses collapse
//! - the empty AND is TRUE; the empty OR is FALSE

use std::collections::HashSet;

use crate::error::CoreResult;

use super::ast::Expr;
use super::parser::parse;

/// A possibly negated feature reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Feature id this literal tests.
    pub feature: String,
    /// Whether the literal is negated.
    pub negated: bool,
}

impl Literal {
    /// Build a positive or negated literal.
    #[inline]
    pub fn new(feature: impl Into<String>, negated: bool) -> Self {
        Self {
            feature: feature.into(),
            negated,
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negated {
            write!(f, "~{}", self.feature)
        } else {
            f.write_str(&self.feature)
        }
    }
}

/// An OR of literals. A clause with no literals evaluates FALSE.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    /// Literals in canonical (sorted) order.
    #[inline]
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Canonicalize: sort, dedup, detect tautology.
    ///
    /// Returns `None` when the clause contains a complementary pair and
    /// is therefore a tautology.
    fn normalize(mut literals: Vec<Literal>) -> Option<Self> {
        literals.sort();
        literals.dedup();
        let tautology = literals.windows(2).any(|w| {
            w[0].feature == w[1].feature && w[0].negated != w[1].negated
        });
        if tautology {
            None
        } else {
            Some(Self { literals })
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.literals.len() == 1 {
            return write!(f, "{}", self.literals[0]);
        }
        f.write_str("(")?;
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{lit}")?;
        }
        f.write_str(")")
    }
}

/// A formula in conjunctive normal form: AND of clauses.
///
/// An empty `Cnf` is the tautology TRUE (every clause of the source
/// formula reduced away).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cnf {
    clauses: Vec<Clause>,
}

/// Negation-normal form: an intermediate tree with negation pushed to
/// the leaves. Only used during the CNF rewrite.
enum Nnf {
    Lit(Literal),
    And(Vec<Nnf>),
    Or(Vec<Nnf>),
}

fn to_nnf(expr: &Expr, negated: bool) -> Nnf {
    match expr {
        Expr::Var(name) => Nnf::Lit(Literal::new(name.clone(), negated)),
        Expr::Not(inner) => to_nnf(inner, !negated),
        Expr::And(a, b) => {
            let children = vec![to_nnf(a, negated), to_nnf(b, negated)];
            // De Morgan: ~(a & b) = ~a | ~b
            if negated {
                Nnf::Or(children)
            } else {
                Nnf::And(children)
            }
        }
        Expr::Or(a, b) => {
            let children = vec![to_nnf(a, negated), to_nnf(b, negated)];
            if negated {
                Nnf::And(children)
            } else {
                Nnf::Or(children)
            }
        }
    }
}

/// Rewrite an NNF tree into raw clause sets, distributing OR over AND.
fn to_clauses(nnf: &Nnf) -> Vec<Vec<Literal>> {
    match nnf {
        Nnf::Lit(lit) => vec![vec![lit.clone()]],
        Nnf::And(children) => children.iter().flat_map(to_clauses).collect(),
        Nnf::Or(children) => {
            // Cross product: (A1 & A2) | (B1 & B2) =
            // (A1|B1) & (A1|B2) & (A2|B1) & (A2|B2)
            let mut acc: Vec<Vec<Literal>> = vec![Vec::new()];
            for child in children {
                let child_clauses = to_clauses(child);
                let mut next = Vec::with_capacity(acc.len() * child_clauses.len());
                for left in &acc {
                    for right in &child_clauses {
                        let mut merged = left.clone();
                        merged.extend(right.iter().cloned());
                        next.push(merged);
                    }
                }
                acc = next;
            }
            acc
        }
    }
}

impl Cnf {
    /// Normalize a parsed expression into CNF.
    pub fn from_expr(expr: &Expr) -> Self {
        let nnf = to_nnf(expr, false);
        let raw = to_clauses(&nnf);

        let mut seen = HashSet::new();
        let mut clauses = Vec::new();
        for literals in raw {
            if let Some(clause) = Clause::normalize(literals) {
                if seen.insert(clause.clone()) {
                    clauses.push(clause);
                }
            }
        }
        Self { clauses }
    }

    /// Parse and normalize in one step.
    ///
    /// # Errors
    /// [`crate::error::CoreError::Parse`] from the parser.
    pub fn parse(source: &str) -> CoreResult<Self> {
        Ok(Self::from_expr(&parse(source)?))
    }

    /// Clauses in first-derivation order.
    #[inline]
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// True when every source clause reduced to a tautology.
    #[inline]
    pub fn is_tautology(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Distinct feature ids referenced, in clause order.
    pub fn features(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for clause in &self.clauses {
            for lit in clause.literals() {
                if !out.contains(&lit.feature.as_str()) {
                    out.push(&lit.feature);
                }
            }
        }
        out
    }
}

impl std::fmt::Display for Cnf {
    /// Render back into the source grammar.
    ///
    /// The empty conjunction (a tautology) has no surface form and
    /// renders as the empty string; it is only displayed diagnostically.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}
