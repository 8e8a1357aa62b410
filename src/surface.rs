//! Points on the Kummer surface and the √5 endomorphism.
//!
//! A point is four homogeneous-style coordinates; the surface's distinguished
//! "zero class" is the locus where the first three vanish. The endomorphism
//! is an ordered quadruple of polynomials (one per output coordinate),
//! immutable for a given curve h and shared read-only across iterations.

use rug::ops::RemRounding;
use rug::Integer;

use crate::poly::Poly4;

/// A 4-coordinate point, carried modulo the current candidate.
///
/// No coordinate is privileged except by the zero-class test, which reads
/// only the first three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point(pub [Integer; 4]);

impl Point {
    pub fn new(coords: [Integer; 4]) -> Self {
        Point(coords)
    }

    /// Every coordinate reduced into `[0, modulus)`.
    pub fn reduce_mod(&self, modulus: &Integer) -> Point {
        Point(std::array::from_fn(|i| {
            Integer::from(&self.0[i]).rem_euc(modulus)
        }))
    }

    /// True when the first three coordinates are all zero.
    pub fn is_zero_class(&self) -> bool {
        self.0[0] == 0 && self.0[1] == 0 && self.0[2] == 0
    }
}

impl From<[i64; 4]> for Point {
    fn from(v: [i64; 4]) -> Self {
        Point(v.map(Integer::from))
    }
}

/// The multiplication-by-√5 map: four polynomials, one per output coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endomorphism {
    polys: [Poly4; 4],
}

impl Endomorphism {
    pub fn new(polys: [Poly4; 4]) -> Self {
        Endomorphism { polys }
    }

    /// The identity map: output coordinate i is input coordinate i.
    pub fn identity() -> Self {
        Endomorphism {
            polys: std::array::from_fn(Poly4::coordinate),
        }
    }

    pub fn polys(&self) -> &[Poly4; 4] {
        &self.polys
    }

    /// Apply the map to a point, reducing every output coordinate modulo
    /// `modulus`. The input point is not touched.
    pub fn apply_mod(&self, pt: &Point, modulus: &Integer) -> Point {
        Point(std::array::from_fn(|i| self.polys[i].eval_mod(&pt.0, modulus)))
    }
}
