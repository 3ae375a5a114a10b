//! Matchwise Core Library
//!
//! Domain-agnostic adaptive recommendation core. The engine conducts an
//! adaptive questionnaire, aggregates uncertain user answers into a fuzzy
//! vector over a space of *needs*, evaluates each catalog object against
//! every need via compiled CNF formulas over object features, ranks the
//! objects, and picks the next question by the expected split it induces
//! on the ranking.
//!
//! # Architecture
//!
//! This crate defines:
//! - The 4-valued fuzzy algebra (`Fuzzy`, Belnap–Łukasiewicz norms)
//! - The formula model and compiler (`formula`: parse → CNF → indices)
//! - Immutable content snapshots (`FeatureTable`, `Catalog`, `NeedSet`,
//!   `QuestionBank`) and the precomputed object × need `MatchMatrix`
//! - Per-session state (`UserProfile`) with lossless answer-log
//!   serialization
//! - Ranking (`matcher`), adaptive question selection (`selector`), and
//!   structured explanations (`explain`)
//! - The `Engine` facade tying the immutable parts together
//!
//! # Concurrency
//!
//! Everything except `UserProfile` is read-only after construction and
//! may be shared across sessions by reference. Profiles are per-session
//! values owned by one logical caller.
//!
//! # Example
//!
//! ```
//! use matchwise_core::{Answer, UserProfile};
//!
//! let mut profile = UserProfile::new();
//! profile.add_answer("active", Answer::Yes, None);
//! assert!(profile.needs().contains_key("active"));
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod formula;
pub mod fuzzy;
pub mod input;
pub mod matcher;
pub mod matrix;
pub mod needs;
pub mod profile;
pub mod selector;

#[cfg(test)]
mod test_fixtures;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogObject, FeatureKind, FeatureTable};
pub use config::{ExplainConfig, SelectorConfig};
pub use engine::Engine;
pub use error::{CoreError, CoreResult, IdKind};
pub use explain::{Explainer, NeedContribution, ObjectExplanation};
pub use formula::{CompiledFormula, Cnf, Expr};
pub use fuzzy::{Fuzzy, FuzzyState};
pub use matcher::{similarity, MatchResult, Matcher, NeedMatch, RankedMatch};
pub use matrix::MatchMatrix;
pub use needs::{Need, NeedSet, Question, QuestionBank};
pub use profile::{Answer, AnswerRecord, ProfileDocument, UnknownNeedPolicy, UserProfile};
pub use selector::{QuestionRanking, Selector};
