//! Tunables for selection and explanation.

use serde::{Deserialize, Serialize};

/// Advisory convergence hints for the adaptive questionnaire.
///
/// The selector itself never terminates on these; they are exposed so
/// callers can decide when further questions stop paying off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Stop hint: no remaining candidate splits the ranking by more
    /// than this. Default: 0.01.
    pub epsilon: f32,
    /// Stop hint: the top-K ranking was unchanged across this many
    /// consecutive answers. Default: 2.
    pub stable_rounds: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            stable_rounds: 2,
        }
    }
}

impl SelectorConfig {
    /// Set the split threshold.
    #[inline]
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// True when a best split falls below the threshold — the caller
    /// may stop asking.
    #[inline]
    pub fn is_exhausted(&self, best_split: f32) -> bool {
        best_split < self.epsilon
    }
}

/// Windows for the structured explanation output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplainConfig {
    /// How many highest-similarity needs to surface as pros.
    /// Default: 3.
    pub max_pros: usize,
    /// How many lowest-similarity needs to surface as cons.
    /// Default: 3.
    pub max_cons: usize,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            max_pros: 3,
            max_cons: 3,
        }
    }
}

impl ExplainConfig {
    /// Set both windows.
    #[inline]
    pub fn with_windows(mut self, max_pros: usize, max_cons: usize) -> Self {
        self.max_pros = max_pros;
        self.max_cons = max_cons;
        self
    }
}
