//! Ranking catalog objects against the user's needs vector.
//!
//! The score of an object is the mean similarity between the user's
//! aggregated value and the matrix evaluation across all *active*
//! needs (defined, non-UNKNOWN aggregates). With no active needs every
//! object scores the uninformative prior 0.5.
//!
//! # Module Structure
//! - `similarity`: the L1 similarity on the (t,f) plane
//! - `result`: ranked and detailed result types

mod result;
mod similarity;


use std::collections::HashMap;

use tracing::warn;

use crate::catalog::Catalog;
use crate::fuzzy::Fuzzy;
use crate::matrix::MatchMatrix;
use crate::needs::NeedSet;

pub use self::result::{MatchResult, NeedMatch, RankedMatch};
pub use self::similarity::similarity;

/// The user's needs vector resolved against the needs set: matrix
/// column positions paired with aggregated values, UNKNOWN filtered.
#[derive(Debug, Clone, Default)]
pub(crate) struct ActiveNeeds {
    pub positions: Vec<usize>,
    pub values: Vec<Fuzzy>,
}

/// Scores and ranks objects from the precomputed matrix.
///
/// Borrows the immutable session-set snapshots; construction is free
/// and a matcher can be created per call.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    catalog: &'a Catalog,
    needs: &'a NeedSet,
    matrix: &'a MatchMatrix,
}

impl<'a> Matcher<'a> {
    /// Bind a matcher to a catalog, needs set, and their matrix.
    pub fn new(catalog: &'a Catalog, needs: &'a NeedSet, matrix: &'a MatchMatrix) -> Self {
        debug_assert_eq!(matrix.n_objects(), catalog.len());
        debug_assert_eq!(matrix.n_needs(), needs.len());
        Self {
            catalog,
            needs,
            matrix,
        }
    }

    /// Resolve a user vector to matrix positions, dropping UNKNOWN
    /// aggregates and ids outside the needs set.
    pub(crate) fn resolve_active(&self, user: &HashMap<String, Fuzzy>) -> ActiveNeeds {
        let mut active = ActiveNeeds::default();
        for (position, need) in self.needs.needs().iter().enumerate() {
            if let Some(&value) = user.get(&need.id) {
                if !value.is_unknown() {
                    active.positions.push(position);
                    active.values.push(value);
                }
            }
        }
        for id in user.keys() {
            if !self.needs.contains(id) {
                warn!(need_id = %id, "user vector references a need outside the needs set");
            }
        }
        active
    }

    /// Per-object running `(Σ similarity, active count)` pairs, in
    /// catalog order. The selector extends these incrementally with
    /// one hypothetical column.
    pub(crate) fn score_components(&self, active: &ActiveNeeds) -> Vec<(f32, usize)> {
        let mut components = vec![(0.0f32, 0usize); self.catalog.len()];
        for (&position, &user_value) in active.positions.iter().zip(&active.values) {
            let column = self.matrix.column(position);
            for (component, &object_value) in components.iter_mut().zip(column) {
                component.0 += similarity(user_value, object_value);
                component.1 += 1;
            }
        }
        components
    }

    /// Final score from running components: mean similarity, or the
    /// 0.5 prior when no need is active.
    #[inline]
    pub(crate) fn finish_score(sum: f32, count: usize) -> f32 {
        if count == 0 {
            0.5
        } else {
            sum / count as f32
        }
    }

    /// Per-object scores under a user vector, in catalog order.
    pub fn scores(&self, user: &HashMap<String, Fuzzy>) -> Vec<f32> {
        let active = self.resolve_active(user);
        self.score_components(&active)
            .into_iter()
            .map(|(sum, count)| Self::finish_score(sum, count))
            .collect()
    }

    /// Rank objects by score: id-and-score pairs only.
    ///
    /// `top_k` truncates the ranking; `subset` restricts scoring to the
    /// named objects (unknown ids are skipped with a warning). Ties
    /// break by ascending object id. An empty catalog yields an empty
    /// ranking.
    pub fn match_fast(
        &self,
        user: &HashMap<String, Fuzzy>,
        top_k: Option<usize>,
        subset: Option<&[&str]>,
    ) -> Vec<RankedMatch> {
        let scores = self.scores(user);

        let mut ranked: Vec<RankedMatch> = match subset {
            Some(ids) => ids
                .iter()
                .filter_map(|id| match self.catalog.position(id) {
                    Some(position) => Some(RankedMatch {
                        object_id: id.to_string(),
                        score: scores[position],
                    }),
                    None => {
                        warn!(object_id = %id, "subset references an unknown object");
                        None
                    }
                })
                .collect(),
            None => self
                .catalog
                .objects()
                .iter()
                .zip(&scores)
                .map(|(object, &score)| RankedMatch {
                    object_id: object.id().to_string(),
                    score,
                })
                .collect(),
        };

        sort_ranked(&mut ranked);
        if let Some(k) = top_k {
            ranked.truncate(k);
        }
        ranked
    }

    /// Rank objects with per-need similarity breakdowns.
    pub fn match_all(
        &self,
        user: &HashMap<String, Fuzzy>,
        top_k: Option<usize>,
    ) -> Vec<MatchResult> {
        let active = self.resolve_active(user);
        let components = self.score_components(&active);

        let mut results: Vec<MatchResult> = self
            .catalog
            .objects()
            .iter()
            .enumerate()
            .map(|(object_position, object)| {
                let needs = active
                    .positions
                    .iter()
                    .zip(&active.values)
                    .map(|(&need_position, &user_value)| {
                        let object_value = self.matrix.value(object_position, need_position);
                        NeedMatch {
                            need_id: self.needs.needs()[need_position].id.clone(),
                            user: user_value,
                            object: object_value,
                            similarity: similarity(user_value, object_value),
                        }
                    })
                    .collect();
                let (sum, count) = components[object_position];
                MatchResult {
                    object_id: object.id().to_string(),
                    score: Self::finish_score(sum, count),
                    needs,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.object_id.cmp(&b.object_id))
        });
        if let Some(k) = top_k {
            results.truncate(k);
        }
        results
    }
}

fn sort_ranked(ranked: &mut [RankedMatch]) {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.object_id.cmp(&b.object_id))
    });
}
