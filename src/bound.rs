//! The analytic step-count bound.
//!
//! A genuine prime λ cannot reach the zero class in fewer than
//! `4·ln(λ^(1/4) + 1)/ln 5` applications of the √5 map; the count comes from
//! the growth rate of the underlying recursive sequence. The classifier
//! compares the integer step index strictly against this unrounded value and
//! reports `floor(bound) + 1` as the human-readable minimum when a run falls
//! short.

use rug::{Float, Integer};

/// Working precision for the logarithms. Candidates up to n ≈ 500 are about
/// 1200 bits; 128 bits of mantissa leaves the f64 result exact to well past
/// its own precision.
const PREC: u32 = 128;

/// Minimum number of √5 applications a prime λ needs to reach the zero
/// class: `4·ln(λ^(1/4) + 1)/ln 5`.
///
/// Strictly increasing in λ for λ ≥ 1.
pub fn zero_step_bound(lambda: &Integer) -> f64 {
    let mut x = Float::with_val(PREC, lambda);
    x.root_mut(4);
    x += 1u32;
    x.ln_mut();
    x *= 4u32;
    let ln5 = Float::with_val(PREC, 5u32).ln();
    x /= ln5;
    x.to_f64()
}

/// `floor(bound) + 1`: the smallest integer step count that would clear the
/// bound, reported alongside inconclusive runs.
pub fn steps_needed(lambda: &Integer) -> u64 {
    zero_step_bound(lambda).floor() as u64 + 1
}
