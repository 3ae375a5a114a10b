//! The `Fuzzy` value type and its connectives.

use serde::{Deserialize, Serialize};

use super::state::FuzzyState;

/// A 4-valued fuzzy truth value: independent truth and falsity degrees.
///
/// Both components live in [0,1]. The value carries *evidence for* (`t`)
/// and *evidence against* (`f`) separately, so "no evidence" `(0,0)` and
/// "contradictory evidence" `(1,1)` are distinct states rather than a
/// single midpoint.
///
/// # Fail-fast contract
///
/// Components outside [0,1] are a programming error: [`Fuzzy::new`]
/// panics on them. Boundary code validates external input *before*
/// constructing values (see [`crate::error::CoreError::ValueOutOfRange`]).
/// Every connective clamps its result back into [0,1], so values remain
/// well-formed under composition.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fuzzy {
    /// Degree of truth (evidence for), in [0,1].
    pub t: f32,
    /// Degree of falsity (evidence against), in [0,1].
    pub f: f32,
}

#[inline]
fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

impl Fuzzy {
    /// Full truth: `(1, 0)`.
    pub const TRUE: Fuzzy = Fuzzy { t: 1.0, f: 0.0 };
    /// Full falsity: `(0, 1)`.
    pub const FALSE: Fuzzy = Fuzzy { t: 0.0, f: 1.0 };
    /// No evidence either way: `(0, 0)`.
    pub const UNKNOWN: Fuzzy = Fuzzy { t: 0.0, f: 0.0 };
    /// Full evidence both ways: `(1, 1)`.
    pub const CONFLICT: Fuzzy = Fuzzy { t: 1.0, f: 1.0 };

    /// Create a value from raw components.
    ///
    /// # Panics
    /// Panics if either component is outside [0,1] or non-finite.
    #[inline]
    pub fn new(t: f32, f: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&f),
            "fuzzy components out of range: ({t}, {f})"
        );
        Self { t, f }
    }

    /// Lift a sharp degree `v` in [0,1] to the pair `(v, 1−v)`.
    ///
    /// This is how scalar feature values enter the algebra.
    ///
    /// # Panics
    /// Panics if `v` is outside [0,1].
    #[inline]
    pub fn from_degree(v: f32) -> Self {
        Self::new(v, 1.0 - v)
    }

    /// Łukasiewicz negation: swap evidence for and against.
    #[inline]
    pub fn not(self) -> Self {
        Self { t: self.f, f: self.t }
    }

    /// Łukasiewicz conjunction.
    ///
    /// `t' = max(0, t₁+t₂−1)`, `f' = min(1, f₁+f₂)`.
    #[inline]
    pub fn and(self, other: Self) -> Self {
        Self {
            t: clamp01(self.t + other.t - 1.0),
            f: clamp01(self.f + other.f),
        }
    }

    /// Łukasiewicz disjunction.
    ///
    /// `t' = min(1, t₁+t₂)`, `f' = max(0, f₁+f₂−1)`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        Self {
            t: clamp01(self.t + other.t),
            f: clamp01(self.f + other.f - 1.0),
        }
    }

    /// Material implication: `¬self ∨ other`.
    #[inline]
    pub fn implies(self, other: Self) -> Self {
        self.not().or(other)
    }

    /// Bi-implication: `(self → other) ∧ (other → self)`.
    #[inline]
    pub fn iff(self, other: Self) -> Self {
        self.implies(other).and(other.implies(self))
    }

    /// n-ary conjunction as the left-fold of [`Fuzzy::and`].
    ///
    /// The empty conjunction is [`Fuzzy::TRUE`], matching the CNF
    /// convention that an empty AND is a tautology.
    #[inline]
    pub fn and_all(values: impl IntoIterator<Item = Fuzzy>) -> Self {
        values.into_iter().fold(Self::TRUE, Self::and)
    }

    /// n-ary disjunction as the left-fold of [`Fuzzy::or`].
    ///
    /// The empty disjunction is [`Fuzzy::FALSE`].
    #[inline]
    pub fn or_all(values: impl IntoIterator<Item = Fuzzy>) -> Self {
        values.into_iter().fold(Self::FALSE, Self::or)
    }

    /// True iff this is exactly the UNKNOWN corner `(0,0)`.
    #[inline]
    pub fn is_unknown(self) -> bool {
        self.t == 0.0 && self.f == 0.0
    }

    /// Pure-truth knowledge component: `t·(1−f)`.
    #[inline]
    pub fn truth(self) -> f32 {
        self.t * (1.0 - self.f)
    }

    /// Pure-falsity knowledge component: `f·(1−t)`.
    #[inline]
    pub fn falsity(self) -> f32 {
        self.f * (1.0 - self.t)
    }

    /// Ignorance component: `(1−t)·(1−f)`.
    #[inline]
    pub fn unknown(self) -> f32 {
        (1.0 - self.t) * (1.0 - self.f)
    }

    /// Contradiction component: `t·f`.
    #[inline]
    pub fn conflict(self) -> f32 {
        self.t * self.f
    }

    /// Classify by the largest knowledge component.
    ///
    /// Ties resolve in the order True, False, Unknown, Conflict, which
    /// keeps the canonical corners mapping to themselves.
    pub fn dominant_state(self) -> FuzzyState {
        let components = [
            (FuzzyState::True, self.truth()),
            (FuzzyState::False, self.falsity()),
            (FuzzyState::Unknown, self.unknown()),
            (FuzzyState::Conflict, self.conflict()),
        ];
        let mut best = components[0];
        for c in &components[1..] {
            if c.1 > best.1 {
                best = *c;
            }
        }
        best.0
    }
}

impl std::fmt::Display for Fuzzy {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "({:.3}, {:.3})", self.t, self.f)
    }
}
