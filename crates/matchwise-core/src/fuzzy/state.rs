//! Dominant-corner classification of fuzzy values.

use serde::{Deserialize, Serialize};

/// The four canonical corners of the Belnap square.
///
/// Used for diagnostics and explanations; the algebra itself always
/// works on the full `(t, f)` plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuzzyState {
    /// Evidence for dominates.
    True,
    /// Evidence against dominates.
    False,
    /// Absence of evidence dominates.
    Unknown,
    /// Contradictory evidence dominates.
    Conflict,
}

impl FuzzyState {
    /// Returns true if this state carries usable directional evidence.
    ///
    /// # Returns
    /// - `true` for True, False
    /// - `false` for Unknown, Conflict
    #[inline]
    pub fn is_decisive(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Short label for logs and structured output.
    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unknown => "unknown",
            Self::Conflict => "conflict",
        }
    }
}

impl std::fmt::Display for FuzzyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
