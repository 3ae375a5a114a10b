//! Needs and their question bank.
//!
//! A *need* is a named formula over object features representing one
//! user-facing preference axis. The question bank holds the generated
//! question variants per need; only needs with at least one question
//! are candidates for the adaptive selector.

mod need_set;
mod question;

pub use self::need_set::{Need, NeedSet};
pub use self::question::{Question, QuestionBank};
