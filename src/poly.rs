//! Sparse integer polynomials in four variables.
//!
//! A polynomial is a sum of terms `coeff * x1^e1 * x2^e2 * x3^e3 * x4^e4`.
//! Evaluation is exact `rug::Integer` arithmetic; the modular variant reduces
//! the exact value once at the end, so intermediates can grow as large as the
//! coefficients and point coordinates demand.

use rug::ops::{Pow, RemRounding};
use rug::Integer;

/// One monomial term: coefficient times a product of coordinate powers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub coeff: Integer,
    pub exps: [u32; 4],
}

impl Term {
    pub fn new(coeff: impl Into<Integer>, exps: [u32; 4]) -> Self {
        Term {
            coeff: coeff.into(),
            exps,
        }
    }
}

/// A sparse polynomial in four variables with integer coefficients.
///
/// The empty term list is the zero polynomial.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Poly4 {
    terms: Vec<Term>,
}

impl Poly4 {
    pub fn new(terms: Vec<Term>) -> Self {
        Poly4 { terms }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Poly4 { terms: Vec::new() }
    }

    /// The coordinate projection x_{i+1} (i is zero-based).
    ///
    /// Panics if `i >= 4`; callers index a fixed 4-coordinate system.
    pub fn coordinate(i: usize) -> Self {
        assert!(i < 4, "coordinate index out of range: {i}");
        let mut exps = [0u32; 4];
        exps[i] = 1;
        Poly4 {
            terms: vec![Term::new(1, exps)],
        }
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Evaluate exactly at a 4-coordinate point.
    pub fn eval(&self, x: &[Integer; 4]) -> Integer {
        let mut acc = Integer::new();
        for t in &self.terms {
            let mut prod = t.coeff.clone();
            for (xi, &e) in x.iter().zip(&t.exps) {
                match e {
                    0 => {}
                    1 => prod *= xi,
                    _ => prod *= Integer::from(xi.pow(e)),
                }
            }
            acc += prod;
        }
        acc
    }

    /// Evaluate at a point and reduce into `[0, modulus)`.
    ///
    /// Exact evaluation first, a single euclidean reduction after, so the
    /// result is well defined for negative coefficients too.
    pub fn eval_mod(&self, x: &[Integer; 4], modulus: &Integer) -> Integer {
        self.eval(x).rem_euc(modulus)
    }
}
