//! Candidate derivation and the verdict state machine.
//!
//! A candidate λ(m,n) = 4·m²·5ⁿ − 1 is classified by one capped walk of the
//! √5 endomorphism:
//!
//! 1. cap exhausted without the zero class → **Not prime**;
//! 2. zero class reached and a pre-collapse coordinate shares a factor with
//!    λ → **Not prime** with that divisor;
//! 3. zero class reached at step r with r strictly above the analytic bound
//!    → **Prime**;
//! 4. zero class reached at or below the bound with only trivial gcds →
//!    **Indeterminate**, reporting r and the step count a prime would have
//!    needed.
//!
//! The divisor check runs on every zero-class hit. For a genuinely prime λ
//! every coordinate gcd is 1 or λ itself, so the check can never demote a
//! prime; for composites it turns both early and late collapses into a
//! constructive verdict whenever a coordinate happens to share a factor.
//! A step count exactly equal to an integral bound stays on the
//! Indeterminate side: only strict `r > bound` proves primality.

use std::fmt;

use anyhow::{ensure, Result};
use rug::ops::Pow;
use rug::Integer;
use tracing::debug;

use crate::engine::{self, IterationOutcome};
use crate::params::ParamSet;
use crate::surface::{Endomorphism, Point};
use crate::{bound, divisor};

/// The candidate under test: λ(m,n) = 4·m²·5ⁿ − 1.
///
/// Recomputed on demand, never stored.
pub fn lambda_mn(m: u32, n: u32) -> Integer {
    Integer::from(m).square() * 4u32 * Integer::from(5u32).pow(n) - 1u32
}

/// Classification result. Ordinary values, never error signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    /// Composite; `divisor` carries a witness when one of the pre-collapse
    /// gcds exhibited a proper factor of λ.
    Composite { divisor: Option<Integer> },
    /// Zero class arrived too early with nothing to show for it: `steps` is
    /// the observed index, `needed` the smallest count that would have
    /// cleared the bound.
    Indeterminate { steps: u64, needed: u64 },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Prime => write!(f, "Prime"),
            Verdict::Composite { divisor: None } => write!(f, "Not prime"),
            Verdict::Composite { divisor: Some(d) } => {
                write!(f, "Not prime, found divisor {d}")
            }
            Verdict::Indeterminate { steps, needed } => write!(
                f,
                "Indeterminate, finished after {steps} steps (needed at least {needed} steps)"
            ),
        }
    }
}

/// Classify an arbitrary positive modulus with an explicit map, start point
/// and step cap. Pure; shared read-only inputs make concurrent calls safe.
pub fn classify(
    map: &Endomorphism,
    start: &Point,
    lambda: &Integer,
    max_steps: u64,
) -> Verdict {
    match engine::iterate(map, start, lambda, max_steps) {
        IterationOutcome::CapExhausted => Verdict::Composite { divisor: None },
        IterationOutcome::ZeroClass { steps, prev } => {
            if let Some(d) = divisor::extract_divisor(&prev, lambda) {
                return Verdict::Composite { divisor: Some(d) };
            }
            let b = bound::zero_step_bound(lambda);
            debug!(steps, bound = b, "zero class with trivial gcds");
            if steps as f64 > b {
                Verdict::Prime
            } else {
                Verdict::Indeterminate {
                    steps,
                    needed: bound::steps_needed(lambda),
                }
            }
        }
    }
}

/// Classify λ(m,n) for the curve data in `set`. The cap is 2n+1
/// applications, so a detected step index always lies in [0, 2n].
pub fn test_primality(n: u32, set: &ParamSet) -> Result<Verdict> {
    ensure!(n >= 1, "n must be at least 1 (got {n})");
    let lambda = lambda_mn(set.m, n);
    let max_steps = 2 * u64::from(n) + 1;
    Ok(classify(&set.map, &set.start, &lambda, max_steps))
}
