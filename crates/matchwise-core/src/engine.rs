//! The engine facade: immutable session-set snapshots plus the
//! precomputed matrix, with the ranking, selection, and explanation
//! operations hanging off it.
//!
//! An `Engine` is built once from validated content and never mutated;
//! it is `Send + Sync` and any number of sessions may share one by
//! reference. Per-session state lives in [`UserProfile`] values owned
//! by their callers.

use tracing::info;

use crate::catalog::{Catalog, FeatureTable};
use crate::config::ExplainConfig;
use crate::error::{CoreError, CoreResult};
use crate::explain::{Explainer, ObjectExplanation};
use crate::input::{
    build_catalog, build_feature_table, build_needs, build_question_bank, CatalogDoc,
    FeatureTableDoc, NeedsDoc, QuestionsDoc,
};
use crate::matcher::{MatchResult, Matcher, RankedMatch};
use crate::matrix::MatchMatrix;
use crate::needs::{NeedSet, QuestionBank};
use crate::profile::{Answer, UserProfile};
use crate::selector::{QuestionRanking, Selector};

/// Immutable recommendation engine for one catalog + needs snapshot.
#[derive(Debug, Clone)]
pub struct Engine {
    table: FeatureTable,
    catalog: Catalog,
    needs: NeedSet,
    questions: QuestionBank,
    matrix: MatchMatrix,
}

impl Engine {
    /// Assemble an engine from already-validated snapshots and build
    /// the match matrix.
    pub fn new(
        table: FeatureTable,
        catalog: Catalog,
        needs: NeedSet,
        questions: QuestionBank,
    ) -> Self {
        let matrix = MatchMatrix::build(&catalog, &needs);
        info!(
            features = table.len(),
            objects = catalog.len(),
            needs = needs.len(),
            questions = questions.len(),
            "engine built"
        );
        Self {
            table,
            catalog,
            needs,
            questions,
            matrix,
        }
    }

    /// Run the full document pipeline: feature table, catalog, needs,
    /// question bank, then the matrix.
    ///
    /// # Errors
    /// Any validation error from the individual builders, surfaced at
    /// the document that introduced the bad data.
    pub fn from_documents(
        table_doc: &FeatureTableDoc,
        catalog_doc: CatalogDoc,
        needs_doc: &NeedsDoc,
        question_docs: Vec<QuestionsDoc>,
    ) -> CoreResult<Self> {
        let table = build_feature_table(table_doc)?;
        let catalog = build_catalog(catalog_doc, &table)?;
        let needs = build_needs(needs_doc, &table)?;
        let questions = build_question_bank(question_docs, &needs)?;
        Ok(Self::new(table, catalog, needs, questions))
    }

    /// The feature table the formulas are compiled against.
    #[inline]
    pub fn feature_table(&self) -> &FeatureTable {
        &self.table
    }

    /// The catalog snapshot.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The needs snapshot.
    #[inline]
    pub fn needs(&self) -> &NeedSet {
        &self.needs
    }

    /// The question bank.
    #[inline]
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    /// The precomputed object × need matrix.
    #[inline]
    pub fn matrix(&self) -> &MatchMatrix {
        &self.matrix
    }

    /// A matcher bound to this engine's snapshots.
    #[inline]
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.catalog, &self.needs, &self.matrix)
    }

    /// A selector bound to this engine's snapshots.
    #[inline]
    pub fn selector(&self) -> Selector<'_> {
        Selector::new(&self.catalog, &self.needs, &self.matrix, &self.questions)
    }

    /// An explainer bound to this engine's snapshots.
    #[inline]
    pub fn explainer(&self) -> Explainer<'_> {
        Explainer::new(&self.catalog, &self.needs, &self.matrix)
    }

    /// Record an answer on a profile, validating the need id against
    /// this engine's needs set.
    ///
    /// # Errors
    /// [`CoreError::UnknownNeed`] when the id is not declared.
    pub fn record_answer(
        &self,
        profile: &mut UserProfile,
        need_id: &str,
        answer: Answer,
        question: Option<&str>,
    ) -> CoreResult<()> {
        if !self.needs.contains(need_id) {
            return Err(CoreError::UnknownNeed(need_id.to_string()));
        }
        profile.add_answer(need_id, answer, question);
        Ok(())
    }

    /// Rank objects for a profile: id-and-score pairs only.
    pub fn match_fast(
        &self,
        profile: &UserProfile,
        top_k: Option<usize>,
        subset: Option<&[&str]>,
    ) -> Vec<RankedMatch> {
        self.matcher().match_fast(profile.needs(), top_k, subset)
    }

    /// Rank objects for a profile with per-need breakdowns.
    pub fn match_all(&self, profile: &UserProfile, top_k: Option<usize>) -> Vec<MatchResult> {
        self.matcher().match_all(profile.needs(), top_k)
    }

    /// The best next question for a profile, or `None` when no
    /// candidate remains.
    pub fn select_next_question(&self, profile: &UserProfile) -> Option<QuestionRanking> {
        self.selector()
            .select_next_question(profile.needs(), &profile.answered_need_ids())
    }

    /// All candidate questions for a profile, best split first.
    pub fn get_question_rankings(
        &self,
        profile: &UserProfile,
        top_k: Option<usize>,
    ) -> Vec<QuestionRanking> {
        self.selector()
            .get_question_rankings(profile.needs(), &profile.answered_need_ids(), top_k)
    }

    /// Explain the top-ranked objects for a profile.
    pub fn explain(
        &self,
        profile: &UserProfile,
        top_k: Option<usize>,
        config: &ExplainConfig,
    ) -> Vec<ObjectExplanation> {
        self.explainer().explain(profile.needs(), top_k, config)
    }
}
