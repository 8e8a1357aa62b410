//! # kummer5 — primality of 4·m²·5ⁿ − 1 via Kummer surface arithmetic
//!
//! Classifies candidates λ(m,n) = 4·m²·5ⁿ − 1 by walking a fixed starting
//! point through repeated application of the "multiplication by √5"
//! endomorphism on the Kummer surface attached to the Jacobian of
//! y² = x⁵ + h, with every coordinate reduced modulo λ. A genuine prime
//! drives the point into the zero class (first three coordinates ≡ 0) only
//! after an analytically determined number of steps; hitting it earlier, or
//! never, betrays compositeness.
//!
//! The endomorphism polynomials and starting vectors are published per-curve
//! data, loaded from TOML parameter tables (see [`params`]). Everything else
//! is exact `rug` big-integer arithmetic.

pub mod bound;
pub mod classify;
pub mod divisor;
pub mod engine;
pub mod params;
pub mod poly;
pub mod surface;
pub mod table;

pub use classify::{lambda_mn, test_primality, Verdict};
pub use params::{ParamSet, ParamTable};
pub use surface::{Endomorphism, Point};
