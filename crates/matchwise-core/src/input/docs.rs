//! Serde document types for the external interfaces.
//!
//! Shapes are strict: unknown fields fail deserialization and surface
//! as schema errors through [`super::parse_json`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::needs::Question;

/// Declares the feature table: plain features plus categorical groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureTableDoc {
    /// Continuous feature declarations.
    pub features: Vec<FeatureDoc>,
    /// Categorical groups with member and derived buckets.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupDoc>,
}

/// One continuous feature declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureDoc {
    /// Stable feature id.
    pub id: String,
    /// Display name, pass-through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A categorical group of soft one-hot buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDoc {
    /// Group id (e.g. `size_group`).
    pub id: String,
    /// Member buckets with their numeric source ranges.
    pub values: Vec<BucketDoc>,
    /// Derived buckets that union members.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived: Vec<DerivedDoc>,
}

/// One member bucket of a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BucketDoc {
    /// Bucket feature id.
    pub id: String,
    /// Inclusive lower bound of the source range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    /// Exclusive upper bound of the source range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
}

/// A named OR of member buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DerivedDoc {
    /// Derived feature id.
    pub id: String,
    /// Member bucket ids, all from the owning group.
    pub members: Vec<String>,
}

/// The catalog: one record per object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDoc {
    /// Object records.
    pub objects: Vec<ObjectDoc>,
}

/// One catalog object record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectDoc {
    /// Stable object id.
    pub id: String,
    /// Feature values in [0,1], keyed by declared feature id.
    #[serde(default)]
    pub features: HashMap<String, f32>,
}

/// The needs list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeedsDoc {
    /// Need records in declaration order.
    pub needs: Vec<NeedDoc>,
}

/// One need record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NeedDoc {
    /// Stable need id.
    pub id: String,
    /// Display name, pass-through.
    pub name: String,
    /// Block tag for UI grouping.
    pub block: String,
    /// Formula source in the `& | ~ ( )` grammar.
    pub formula: String,
    /// Weight hint; carried, not interpreted by the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

/// The generated questions for one need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionsDoc {
    /// The need these variants ask about.
    pub need_id: String,
    /// Question variants in document order.
    pub questions: Vec<Question>,
}
