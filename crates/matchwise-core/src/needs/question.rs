//! Generated question variants, grouped per need.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, IdKind};

use super::need_set::NeedSet;

/// One generated question variant for a need.
///
/// The core interprets only the need-id linkage; text, style, and
/// verification are pass-through payload for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique id of this question variant.
    pub id: String,
    /// Question text, passed through unchanged.
    pub text: String,
    /// Confidence weight of this variant.
    #[serde(default = "default_weight")]
    pub weight: f32,
    /// Presentation style hint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Verification hint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification: Option<String>,
}

fn default_weight() -> f32 {
    1.0
}

/// Question variants keyed by need id.
///
/// A need is a selector candidate iff it has at least one variant here.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    by_need: HashMap<String, Vec<Question>>,
}

impl QuestionBank {
    /// An empty bank: no need is askable.
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a bank from `(need_id, variants)` groups, validated
    /// against the current needs set.
    ///
    /// # Errors
    /// - [`CoreError::UnknownNeed`] if a group names an undeclared need
    /// - [`CoreError::Duplicate`] if two variants share an id
    pub fn new<I>(groups: I, needs: &NeedSet) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (String, Vec<Question>)>,
    {
        let mut by_need: HashMap<String, Vec<Question>> = HashMap::new();
        let mut seen = HashSet::new();
        for (need_id, questions) in groups {
            if !needs.contains(&need_id) {
                return Err(CoreError::UnknownNeed(need_id));
            }
            for q in &questions {
                if !seen.insert(q.id.clone()) {
                    return Err(CoreError::duplicate(IdKind::Question, &q.id));
                }
            }
            by_need.entry(need_id).or_default().extend(questions);
        }
        Ok(Self { by_need })
    }

    /// True when the need has at least one question variant.
    #[inline]
    pub fn has_question(&self, need_id: &str) -> bool {
        self.by_need
            .get(need_id)
            .is_some_and(|qs| !qs.is_empty())
    }

    /// All variants for a need, in document order.
    #[inline]
    pub fn questions_for(&self, need_id: &str) -> &[Question] {
        self.by_need.get(need_id).map_or(&[], Vec::as_slice)
    }

    /// Variants for a need that have not been asked yet.
    pub fn unasked<'a>(
        &'a self,
        need_id: &str,
        asked: &'a HashSet<String>,
    ) -> impl Iterator<Item = &'a Question> + 'a {
        self.questions_for(need_id)
            .iter()
            .filter(move |q| !asked.contains(&q.id))
    }

    /// Total number of question variants.
    pub fn len(&self) -> usize {
        self.by_need.values().map(Vec::len).sum()
    }

    /// True when the bank holds no variants.
    pub fn is_empty(&self) -> bool {
        self.by_need.values().all(Vec::is_empty)
    }
}
