//! Per-session user profile: answer log and derived needs vector.
//!
//! The profile is an append-only log of raw answers plus two caches
//! derived from it: the aggregated fuzzy value per need and the set of
//! needs the user declared irrelevant. The derivation
//! ([`aggregate_log`]) is a pure function of the log; the caches are
//! updated incrementally on every append and recomputed wholesale when
//! a profile is loaded from its serialized document.
//!
//! # Module Structure
//! - `answer`: the `Answer` variants and the raw log record
//! - `document`: the portable `ProfileDocument` (version 1) and load
//!   policies

mod answer;
mod document;

#[cfg(test)]
mod tests_aggregate;
#[cfg(test)]
mod tests_document;

use std::collections::{HashMap, HashSet};

use chrono::Utc;

use crate::fuzzy::Fuzzy;

pub use self::answer::{Answer, AnswerRecord};
pub use self::document::{ProfileDocument, UnknownNeedPolicy, PROFILE_VERSION};

/// Running yes/no/unknown counts for one need.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    yes: u32,
    no: u32,
    unknown: u32,
}

impl Tally {
    /// Aggregate per the dilution rule: `t = Y/(Y+N+U)`,
    /// `f = N/(Y+N+U)`; with no directional answers the aggregate is
    /// UNKNOWN.
    fn to_fuzzy(self) -> Fuzzy {
        if self.yes + self.no == 0 {
            return Fuzzy::UNKNOWN;
        }
        let total = (self.yes + self.no + self.unknown) as f32;
        Fuzzy::new(self.yes as f32 / total, self.no as f32 / total)
    }
}

/// A user's session state: the answer log plus derived caches.
///
/// Created empty, mutated only through [`UserProfile::add_answer`] (and
/// its [`UserProfile::mark_independent`] alias), and serializable
/// losslessly from the log alone.
#[derive(Debug, Clone, Default)]
pub struct UserProfile {
    log: Vec<AnswerRecord>,
    tallies: HashMap<String, Tally>,
    aggregate: HashMap<String, Fuzzy>,
    independent: HashSet<String>,
}

impl UserProfile {
    /// An empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an answer and update the derived caches.
    ///
    /// The record is stamped with the current UTC time. The need id is
    /// not validated here — the profile is independent of any needs
    /// set; use [`crate::engine::Engine::record_answer`] for the
    /// validated path.
    pub fn add_answer(&mut self, need_id: impl Into<String>, answer: Answer, question: Option<&str>) {
        self.push_record(AnswerRecord {
            need_id: need_id.into(),
            answer,
            question: question.map(str::to_string),
            timestamp: Some(Utc::now()),
            ext: Default::default(),
        });
    }

    /// Alias for `add_answer(need_id, Answer::Independent, None)`.
    pub fn mark_independent(&mut self, need_id: impl Into<String>) {
        self.add_answer(need_id, Answer::Independent, None);
    }

    /// Append a pre-built record (used by deserialization to preserve
    /// original timestamps and extension payloads).
    pub(crate) fn push_record(&mut self, record: AnswerRecord) {
        apply(
            &mut self.tallies,
            &mut self.aggregate,
            &mut self.independent,
            &record.need_id,
            record.answer,
        );
        self.log.push(record);
    }

    /// The aggregated needs vector: one fuzzy value per answered need.
    ///
    /// Needs in the independent set are absent. Needs answered only
    /// with `unknown` are present with the UNKNOWN value (they count as
    /// covered for question selection but carry no evidence for
    /// matching).
    #[inline]
    pub fn needs(&self) -> &HashMap<String, Fuzzy> {
        &self.aggregate
    }

    /// Aggregated value for one need, if any.
    #[inline]
    pub fn need(&self, need_id: &str) -> Option<Fuzzy> {
        self.aggregate.get(need_id).copied()
    }

    /// True when the user declared this need irrelevant.
    #[inline]
    pub fn is_independent(&self, need_id: &str) -> bool {
        self.independent.contains(need_id)
    }

    /// The needs declared irrelevant.
    #[inline]
    pub fn independent(&self) -> &HashSet<String> {
        &self.independent
    }

    /// All need ids covered so far: aggregated keys plus the
    /// independent set. The selector excludes these.
    pub fn answered_need_ids(&self) -> HashSet<String> {
        self.aggregate
            .keys()
            .chain(self.independent.iter())
            .cloned()
            .collect()
    }

    /// The raw answer log, in arrival order.
    #[inline]
    pub fn log(&self) -> &[AnswerRecord] {
        &self.log
    }

    /// True when no answers were recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }
}

fn apply(
    tallies: &mut HashMap<String, Tally>,
    aggregate: &mut HashMap<String, Fuzzy>,
    independent: &mut HashSet<String>,
    need_id: &str,
    answer: Answer,
) {
    match answer {
        Answer::Independent => {
            // Overrides any prior aggregate; counting restarts if the
            // need later re-enters.
            tallies.remove(need_id);
            aggregate.remove(need_id);
            independent.insert(need_id.to_string());
        }
        Answer::Yes | Answer::No => {
            independent.remove(need_id);
            let tally = tallies.entry(need_id.to_string()).or_default();
            match answer {
                Answer::Yes => tally.yes += 1,
                _ => tally.no += 1,
            }
            aggregate.insert(need_id.to_string(), tally.to_fuzzy());
        }
        Answer::Unknown => {
            // Recorded, marks the need as covered, but never moves the
            // aggregate toward yes or no. While the need is
            // independent the record is log-only.
            if independent.contains(need_id) {
                return;
            }
            let tally = tallies.entry(need_id.to_string()).or_default();
            tally.unknown += 1;
            aggregate.insert(need_id.to_string(), tally.to_fuzzy());
        }
    }
}

/// Pure derivation of the caches from a raw log.
///
/// Returns the aggregated map and the independent set; the two are
/// disjoint by construction. [`UserProfile`] keeps the same state
/// incrementally; this function is the reference definition.
pub fn aggregate_log(records: &[AnswerRecord]) -> (HashMap<String, Fuzzy>, HashSet<String>) {
    let mut tallies = HashMap::new();
    let mut aggregate = HashMap::new();
    let mut independent = HashSet::new();
    for record in records {
        apply(
            &mut tallies,
            &mut aggregate,
            &mut independent,
            &record.need_id,
            record.answer,
        );
    }
    (aggregate, independent)
}
