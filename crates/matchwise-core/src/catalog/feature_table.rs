//! The feature table: every id a formula may reference.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, IdKind};

/// What kind of feature an id names.
///
/// The evaluator never distinguishes kinds; they matter only at load
/// time (derived materialization) and for round-tripping group
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// A plain [0,1] attribute (e.g. `energy`).
    Continuous,
    /// A soft one-hot member of a categorical group. The numeric range
    /// is inert metadata consumed by external extraction pipelines.
    Bucket {
        /// Owning group id.
        group: String,
        /// Inclusive lower bound of the source range, if bounded.
        min: Option<f32>,
        /// Exclusive upper bound of the source range, if bounded.
        max: Option<f32>,
    },
    /// A named OR of member buckets, materialized into a concrete value
    /// at catalog load.
    Derived {
        /// Owning group id.
        group: String,
        /// Member bucket ids this derived bucket unions.
        members: Vec<String>,
    },
}

/// A single feature declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDef {
    /// Stable feature id; the namespace shared by formulas and objects.
    pub id: String,
    /// Kind of feature.
    pub kind: FeatureKind,
}

impl FeatureDef {
    /// A continuous feature declaration.
    #[inline]
    pub fn continuous(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: FeatureKind::Continuous,
        }
    }
}

/// The fixed table of declared features.
///
/// Assigns a dense `u32` index to every id. Formula compilation and
/// object storage both resolve against these indices, so a feature id
/// is checked exactly once, at the boundary.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    defs: Vec<FeatureDef>,
    index: HashMap<String, u32>,
    /// Derived features as (feature index, member indices), precomputed
    /// for catalog materialization.
    derived: Vec<(u32, Vec<u32>)>,
}

impl FeatureTable {
    /// Build a table from declarations.
    ///
    /// # Errors
    /// - [`CoreError::Duplicate`] if two declarations share an id
    /// - [`CoreError::UnknownFeature`] if a derived bucket names a
    ///   member the table does not declare
    pub fn new(defs: Vec<FeatureDef>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if index.insert(def.id.clone(), i as u32).is_some() {
                return Err(CoreError::duplicate(IdKind::Feature, &def.id));
            }
        }

        let mut derived = Vec::new();
        for (i, def) in defs.iter().enumerate() {
            if let FeatureKind::Derived { members, .. } = &def.kind {
                let mut member_indices = Vec::with_capacity(members.len());
                for member in members {
                    let idx = index
                        .get(member)
                        .copied()
                        .ok_or_else(|| CoreError::UnknownFeature(member.clone()))?;
                    member_indices.push(idx);
                }
                derived.push((i as u32, member_indices));
            }
        }

        Ok(Self {
            defs,
            index,
            derived,
        })
    }

    /// Convenience: a table of continuous features only.
    pub fn from_ids<I, S>(ids: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(FeatureDef::continuous).collect())
    }

    /// Number of declared features.
    #[inline]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// True when no features are declared.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Dense index for an id, if declared.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied()
    }

    /// Id at a dense index.
    ///
    /// # Panics
    /// Panics if the index is out of bounds; indices only come from
    /// [`FeatureTable::index_of`] against the same table.
    #[inline]
    pub fn id_of(&self, index: u32) -> &str {
        &self.defs[index as usize].id
    }

    /// Declaration at a dense index, if in bounds.
    #[inline]
    pub fn def(&self, index: u32) -> Option<&FeatureDef> {
        self.defs.get(index as usize)
    }

    /// All declarations in index order.
    #[inline]
    pub fn defs(&self) -> &[FeatureDef] {
        &self.defs
    }

    /// Derived features as (feature index, member indices).
    #[inline]
    pub(crate) fn derived_members(&self) -> &[(u32, Vec<u32>)] {
        &self.derived
    }
}
