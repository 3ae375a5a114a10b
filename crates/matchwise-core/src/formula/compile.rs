//! Index-resolved evaluation form of a CNF formula.

use crate::catalog::FeatureTable;
use crate::error::{CoreError, CoreResult};

use super::cnf::Cnf;

/// A literal with its feature id resolved to a dense table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompiledLiteral {
    /// Index into the feature table.
    pub feature: u32,
    /// Whether the literal is negated.
    pub negated: bool,
}

/// A CNF formula compiled against a fixed feature table.
///
/// Clauses are flat arrays of [`CompiledLiteral`]; evaluation walks them
/// without any string lookups. Compilation is the point where every
/// literal is checked against the table, so a `CompiledFormula` can only
/// reference features that exist.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFormula {
    clauses: Vec<Vec<CompiledLiteral>>,
}

impl CompiledFormula {
    /// Resolve a normalized formula against a feature table.
    ///
    /// # Errors
    /// [`CoreError::UnknownFeature`] if a literal references an id the
    /// table does not declare.
    pub fn compile(cnf: &Cnf, table: &FeatureTable) -> CoreResult<Self> {
        let mut clauses = Vec::with_capacity(cnf.clauses().len());
        for clause in cnf.clauses() {
            let mut compiled = Vec::with_capacity(clause.literals().len());
            for lit in clause.literals() {
                let feature = table
                    .index_of(&lit.feature)
                    .ok_or_else(|| CoreError::UnknownFeature(lit.feature.clone()))?;
                compiled.push(CompiledLiteral {
                    feature,
                    negated: lit.negated,
                });
            }
            clauses.push(compiled);
        }
        Ok(Self { clauses })
    }

    /// Parse, normalize, and compile a formula source string.
    ///
    /// # Errors
    /// [`CoreError::Parse`] or [`CoreError::UnknownFeature`].
    pub fn parse_and_compile(source: &str, table: &FeatureTable) -> CoreResult<Self> {
        Self::compile(&Cnf::parse(source)?, table)
    }

    /// Compiled clauses: outer AND, inner OR.
    #[inline]
    pub fn clauses(&self) -> &[Vec<CompiledLiteral>] {
        &self.clauses
    }

    /// Number of clauses.
    #[inline]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// True for the empty conjunction (tautology).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
