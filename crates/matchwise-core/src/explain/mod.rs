//! Structured per-object explanations of a ranking.
//!
//! For each ranked object the explainer lists every active need with
//! the user's aggregate, the matrix evaluation, and their similarity,
//! then windows the list: the highest-similarity needs are *pros*, the
//! lowest are *cons*, and needs whose aggregate carries evidence on
//! both sides are surfaced separately as *conflicts*. No natural
//! language is produced here; the output is data for a presentation
//! layer.

#[cfg(test)]
mod tests_explain;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::ExplainConfig;
use crate::fuzzy::Fuzzy;
use crate::matcher::{similarity, Matcher, RankedMatch};
use crate::matrix::MatchMatrix;
use crate::needs::NeedSet;

/// One need's contribution to an object's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedContribution {
    /// The contributing need.
    pub need_id: String,
    /// The user's aggregated value.
    pub user: Fuzzy,
    /// The matrix evaluation on this object.
    pub object: Fuzzy,
    /// Similarity between the two, in [0,1].
    pub similarity: f32,
}

/// Explanation for one ranked object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectExplanation {
    /// Catalog object id.
    pub object_id: String,
    /// The object's ranking score.
    pub score: f32,
    /// Highest-similarity needs, best first.
    pub pros: Vec<NeedContribution>,
    /// Lowest-similarity needs, worst first.
    pub cons: Vec<NeedContribution>,
    /// Needs whose aggregate holds evidence both for and against;
    /// listed apart so callers can present or discount them.
    pub conflicts: Vec<NeedContribution>,
}

/// Produces structured explanations from the same snapshots the
/// matcher ranks with.
#[derive(Debug, Clone, Copy)]
pub struct Explainer<'a> {
    catalog: &'a Catalog,
    needs: &'a NeedSet,
    matrix: &'a MatchMatrix,
}

impl<'a> Explainer<'a> {
    /// Bind an explainer to the immutable session-set snapshots.
    pub fn new(catalog: &'a Catalog, needs: &'a NeedSet, matrix: &'a MatchMatrix) -> Self {
        Self {
            catalog,
            needs,
            matrix,
        }
    }

    /// Rank the catalog and explain the top `top_k` objects.
    pub fn explain(
        &self,
        user: &HashMap<String, Fuzzy>,
        top_k: Option<usize>,
        config: &ExplainConfig,
    ) -> Vec<ObjectExplanation> {
        let matcher = Matcher::new(self.catalog, self.needs, self.matrix);
        let ranked = matcher.match_fast(user, top_k, None);
        self.explain_ranking(&ranked, user, config)
    }

    /// Explain an existing ranking without re-sorting it.
    pub fn explain_ranking(
        &self,
        ranked: &[RankedMatch],
        user: &HashMap<String, Fuzzy>,
        config: &ExplainConfig,
    ) -> Vec<ObjectExplanation> {
        let matcher = Matcher::new(self.catalog, self.needs, self.matrix);
        let active = matcher.resolve_active(user);

        ranked
            .iter()
            .filter_map(|row| {
                let object_position = self.catalog.position(&row.object_id)?;
                Some(self.explain_object(row, object_position, &active, config))
            })
            .collect()
    }

    fn explain_object(
        &self,
        row: &RankedMatch,
        object_position: usize,
        active: &crate::matcher::ActiveNeeds,
        config: &ExplainConfig,
    ) -> ObjectExplanation {
        let mut conflicts = Vec::new();
        let mut scored = Vec::new();

        for (&need_position, &user_value) in active.positions.iter().zip(&active.values) {
            let object_value = self.matrix.value(object_position, need_position);
            let contribution = NeedContribution {
                need_id: self.needs.needs()[need_position].id.clone(),
                user: user_value,
                object: object_value,
                similarity: similarity(user_value, object_value),
            };
            // Evidence on both sides of the aggregate: conflict-ward.
            if user_value.t > 0.0 && user_value.f > 0.0 {
                conflicts.push(contribution);
            } else {
                scored.push(contribution);
            }
        }

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.need_id.cmp(&b.need_id))
        });

        let pros: Vec<NeedContribution> =
            scored.iter().take(config.max_pros).cloned().collect();
        // `scored` is best-first; walking the tail backwards yields the
        // cons window worst-first without re-sorting.
        let remaining = &scored[pros.len()..];
        let cons: Vec<NeedContribution> = remaining
            .iter()
            .rev()
            .take(config.max_cons)
            .cloned()
            .collect();

        ObjectExplanation {
            object_id: row.object_id.clone(),
            score: row.score,
            pros,
            cons,
            conflicts,
        }
    }
}
