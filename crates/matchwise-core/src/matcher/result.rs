//! Ranking result types.

use serde::{Deserialize, Serialize};

use crate::fuzzy::Fuzzy;

/// One row of a fast ranking: object id and score only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// Catalog object id.
    pub object_id: String,
    /// Mean similarity over the active needs, in [0,1].
    pub score: f32,
}

/// Per-need breakdown row of a detailed ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedMatch {
    /// The need this row describes.
    pub need_id: String,
    /// The user's aggregated value for the need.
    pub user: Fuzzy,
    /// The matrix evaluation of the need on this object.
    pub object: Fuzzy,
    /// Similarity between the two, in [0,1].
    pub similarity: f32,
}

/// One row of a detailed ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Catalog object id.
    pub object_id: String,
    /// Mean similarity over the active needs, in [0,1].
    pub score: f32,
    /// Per-need rows for every active need, in need declaration order.
    pub needs: Vec<NeedMatch>,
}
