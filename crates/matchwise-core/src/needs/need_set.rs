//! The immutable, ordered set of needs.

use std::collections::HashMap;

use crate::catalog::FeatureTable;
use crate::error::{CoreError, CoreResult, IdKind};
use crate::formula::CompiledFormula;

/// One preference axis: a named, compiled formula over features.
#[derive(Debug, Clone)]
pub struct Need {
    /// Stable need id.
    pub id: String,
    /// Human-facing name, passed through unchanged.
    pub name: String,
    /// Block tag for UI grouping.
    pub block: String,
    /// Weight hint supplied by external documents. Carried, not
    /// interpreted by the core.
    pub weight: Option<f32>,
    /// Compiled evaluation form of the formula.
    pub formula: CompiledFormula,
    /// Original formula source, kept for diagnostics and round-trips.
    pub source: String,
}

impl Need {
    /// Parse and compile a need from its raw fields.
    ///
    /// # Errors
    /// [`CoreError::Parse`] or [`CoreError::UnknownFeature`] from the
    /// formula pipeline.
    pub fn compile(
        id: impl Into<String>,
        name: impl Into<String>,
        block: impl Into<String>,
        formula_source: &str,
        weight: Option<f32>,
        table: &FeatureTable,
    ) -> CoreResult<Self> {
        let formula = CompiledFormula::parse_and_compile(formula_source, table)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            block: block.into(),
            weight,
            formula,
            source: formula_source.to_string(),
        })
    }
}

/// The ordered set of needs for a session set.
///
/// Order is the declaration order of the source document; the selector
/// breaks ties by it.
#[derive(Debug, Clone)]
pub struct NeedSet {
    needs: Vec<Need>,
    index: HashMap<String, usize>,
}

impl NeedSet {
    /// Build the set, rejecting duplicate ids.
    ///
    /// # Errors
    /// [`CoreError::Duplicate`] on an id collision.
    pub fn new(needs: Vec<Need>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(needs.len());
        for (i, need) in needs.iter().enumerate() {
            if index.insert(need.id.clone(), i).is_some() {
                return Err(CoreError::duplicate(IdKind::Need, &need.id));
            }
        }
        Ok(Self { needs, index })
    }

    /// Number of needs.
    #[inline]
    pub fn len(&self) -> usize {
        self.needs.len()
    }

    /// True when the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.needs.is_empty()
    }

    /// Need by id.
    #[inline]
    pub fn get(&self, id: &str) -> Option<&Need> {
        self.index.get(id).map(|&i| &self.needs[i])
    }

    /// True when the id names a need in this set.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a need in declaration order.
    #[inline]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Needs in declaration order.
    #[inline]
    pub fn needs(&self) -> &[Need] {
        &self.needs
    }

    /// Need ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.needs.iter().map(|n| n.id.as_str())
    }
}
