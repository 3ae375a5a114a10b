//! Adaptive question selection by expected ranking split.
//!
//! For every candidate need (has a generated question, not yet
//! covered), the selector scores the catalog twice — once as if the
//! user answered TRUE, once FALSE — and takes the mean absolute score
//! difference as the need's *split*. The biggest split is the question
//! whose answer moves the ranking most.
//!
//! Only the candidate's own matrix column differs between the two
//! hypothetical scores, so the per-object running components of the
//! current vector are computed once and each candidate costs O(1) per
//! object on top.

#[cfg(test)]
mod tests_split;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Catalog;
use crate::fuzzy::Fuzzy;
use crate::matcher::{similarity, Matcher};
use crate::matrix::MatchMatrix;
use crate::needs::{NeedSet, QuestionBank};

/// A candidate need with its split score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRanking {
    /// The need whose question would be asked.
    pub need_id: String,
    /// Mean absolute score difference between the TRUE and FALSE
    /// hypotheses, in [0,1].
    pub split: f32,
}

/// Ranks unanswered needs by the split their answer would induce.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
    needs: &'a NeedSet,
    matrix: &'a MatchMatrix,
    questions: &'a QuestionBank,
}

impl<'a> Selector<'a> {
    /// Bind a selector to the immutable session-set snapshots.
    pub fn new(
        catalog: &'a Catalog,
        needs: &'a NeedSet,
        matrix: &'a MatchMatrix,
        questions: &'a QuestionBank,
    ) -> Self {
        Self {
            catalog,
            needs,
            matrix,
            questions,
        }
    }

    /// The best next question, or `None` when no candidate remains.
    ///
    /// Ties break by need declaration order. `answered` is the set of
    /// need ids already covered (aggregated or independent); needs
    /// without a generated question are never candidates.
    pub fn select_next_question(
        &self,
        user: &HashMap<String, Fuzzy>,
        answered: &HashSet<String>,
    ) -> Option<QuestionRanking> {
        let mut best: Option<QuestionRanking> = None;
        for ranking in self.split_scores(user, answered) {
            match &best {
                Some(current) if ranking.split <= current.split => {}
                _ => best = Some(ranking),
            }
        }
        if let Some(choice) = &best {
            debug!(need_id = %choice.need_id, split = choice.split, "next question selected");
        }
        best
    }

    /// All candidates ordered by descending split, ties in declaration
    /// order. `top_k` truncates the list.
    pub fn get_question_rankings(
        &self,
        user: &HashMap<String, Fuzzy>,
        answered: &HashSet<String>,
        top_k: Option<usize>,
    ) -> Vec<QuestionRanking> {
        let mut rankings = self.split_scores(user, answered);
        // Stable sort keeps declaration order within equal splits.
        rankings.sort_by(|a, b| {
            b.split
                .partial_cmp(&a.split)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(k) = top_k {
            rankings.truncate(k);
        }
        rankings
    }

    /// Split scores for every candidate, in need declaration order.
    fn split_scores(
        &self,
        user: &HashMap<String, Fuzzy>,
        answered: &HashSet<String>,
    ) -> Vec<QuestionRanking> {
        let matcher = Matcher::new(self.catalog, self.needs, self.matrix);
        let active = matcher.resolve_active(user);
        let components = matcher.score_components(&active);
        let active_positions: HashSet<usize> = active.positions.iter().copied().collect();
        let n_objects = self.catalog.len();

        let mut rankings = Vec::new();
        for (position, need) in self.needs.needs().iter().enumerate() {
            if answered.contains(&need.id)
                || active_positions.contains(&position)
                || !self.questions.has_question(&need.id)
            {
                continue;
            }

            let column = self.matrix.column(position);
            let mut total = 0.0f32;
            for (&(sum, count), &object_value) in components.iter().zip(column) {
                let s_true =
                    Matcher::finish_score(sum + similarity(Fuzzy::TRUE, object_value), count + 1);
                let s_false =
                    Matcher::finish_score(sum + similarity(Fuzzy::FALSE, object_value), count + 1);
                total += (s_true - s_false).abs();
            }
            let split = if n_objects == 0 {
                0.0
            } else {
                total / n_objects as f32
            };

            rankings.push(QuestionRanking {
                need_id: need.id.clone(),
                split,
            });
        }
        rankings
    }
}
