//! The iteration walk: repeated √5 application with zero-class detection.
//!
//! State is the pair (previous point, current point). At step r the map is
//! applied once; the walk stops at the first r where the current point falls
//! into the zero class, reporting r together with the point from just before
//! that application. A fixed cap bounds the walk; for λ(m,n) the cap is
//! 2n+1 applications, so a detected r always lies in [0, 2n].

use rug::Integer;
use tracing::trace;

use crate::surface::{Endomorphism, Point};

/// Outcome of one capped walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// Zero class entered after the application at step index `steps`;
    /// `prev` is the point the map was applied to at that step.
    ZeroClass { steps: u64, prev: Point },
    /// The cap was exhausted without the zero class appearing.
    CapExhausted,
}

/// Walk `start` (reduced modulo `modulus` first) under `map` for at most
/// `max_steps` applications.
///
/// Degenerate moduli need no special case: modulo 1 every coordinate reduces
/// to 0, so the first application lands in the zero class at step 0.
pub fn iterate(
    map: &Endomorphism,
    start: &Point,
    modulus: &Integer,
    max_steps: u64,
) -> IterationOutcome {
    let mut curr = start.reduce_mod(modulus);
    for r in 0..max_steps {
        let next = map.apply_mod(&curr, modulus);
        if next.is_zero_class() {
            trace!(steps = r, "zero class reached");
            return IterationOutcome::ZeroClass { steps: r, prev: curr };
        }
        curr = next;
    }
    IterationOutcome::CapExhausted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::{Poly4, Term};

    /// Map whose first three outputs are identically zero; the fourth is x4.
    fn annihilator() -> Endomorphism {
        Endomorphism::new([
            Poly4::zero(),
            Poly4::zero(),
            Poly4::zero(),
            Poly4::coordinate(3),
        ])
    }

    /// Countdown map (a,b,c,d) -> (a-d, b-d, c-d, d): from (s,s,s,1) the
    /// first three coordinates hit zero after exactly s applications,
    /// i.e. at step index s-1.
    fn countdown() -> Endomorphism {
        let minus_d = |i: usize| {
            Poly4::new(vec![
                Term::new(1, {
                    let mut e = [0u32; 4];
                    e[i] = 1;
                    e
                }),
                Term::new(-1, [0, 0, 0, 1]),
            ])
        };
        Endomorphism::new([minus_d(0), minus_d(1), minus_d(2), Poly4::coordinate(3)])
    }

    #[test]
    fn immediate_zero_reports_step_zero_and_start_as_prev() {
        let m = Integer::from(899);
        let start = Point::from([29, 31, 5, 1]);
        match iterate(&annihilator(), &start, &m, 5) {
            IterationOutcome::ZeroClass { steps, prev } => {
                assert_eq!(steps, 0);
                assert_eq!(prev, start.reduce_mod(&m));
            }
            other => panic!("expected zero class, got {other:?}"),
        }
    }

    #[test]
    fn countdown_zeroes_at_expected_step() {
        let m = Integer::from(499);
        match iterate(&countdown(), &Point::from([6, 6, 6, 1]), &m, 7) {
            IterationOutcome::ZeroClass { steps, prev } => {
                assert_eq!(steps, 5);
                assert_eq!(prev, Point::from([1, 1, 1, 1]));
            }
            other => panic!("expected zero class, got {other:?}"),
        }
    }

    #[test]
    fn cap_exhaustion_when_zero_is_out_of_reach() {
        let m = Integer::from(179);
        // Needs 6 applications but the cap is 3
        let out = iterate(&countdown(), &Point::from([6, 6, 6, 1]), &m, 3);
        assert_eq!(out, IterationOutcome::CapExhausted);
    }

    #[test]
    fn identity_map_never_reaches_zero() {
        let m = Integer::from(19);
        let out = iterate(
            &Endomorphism::identity(),
            &Point::from([1, 1, 1, 1]),
            &m,
            100,
        );
        assert_eq!(out, IterationOutcome::CapExhausted);
    }

    #[test]
    fn modulus_one_detects_zero_at_step_zero() {
        let m = Integer::from(1);
        match iterate(&countdown(), &Point::from([6, 6, 6, 1]), &m, 3) {
            IterationOutcome::ZeroClass { steps, prev } => {
                assert_eq!(steps, 0);
                assert_eq!(prev, Point::from([0, 0, 0, 0]));
            }
            other => panic!("expected zero class, got {other:?}"),
        }
    }

    #[test]
    fn zero_steps_cap_exhausts_without_applying() {
        let m = Integer::from(899);
        let out = iterate(&annihilator(), &Point::from([1, 2, 3, 4]), &m, 0);
        assert_eq!(out, IterationOutcome::CapExhausted);
    }
}
