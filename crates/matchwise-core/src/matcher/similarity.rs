//! Similarity between a user aggregate and a matrix evaluation.

use crate::fuzzy::Fuzzy;

/// L1 similarity on the (t,f) plane:
/// `1 − ½·(|tu − tm| + |fu − fm|)`, in [0,1].
///
/// Linear, symmetric in truth versus falsity (swapping both sides
/// through NOT preserves it), monotone in the Belnap information
/// order, and equal to `1 − |vu − vo|` when both sides are sharp
/// `(v, 1−v)` pairs.
#[inline]
pub fn similarity(user: Fuzzy, object: Fuzzy) -> f32 {
    1.0 - 0.5 * ((user.t - object.t).abs() + (user.f - object.f).abs())
}
