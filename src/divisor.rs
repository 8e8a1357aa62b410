//! Witness-divisor extraction from a pre-collapse point.
//!
//! When the walk enters the zero class suspiciously early, the coordinates of
//! the point just before the collapse tend to share a factor with a composite
//! λ. Any gcd strictly between 1 and λ is a genuine divisor of λ.

use rug::Integer;

/// Gcd of each coordinate of `prev` with `lambda`; the first gcd d with
/// `1 < d < lambda`, if any.
pub fn extract_divisor(prev: &crate::surface::Point, lambda: &Integer) -> Option<Integer> {
    prev.0
        .iter()
        .map(|x| Integer::from(x.gcd_ref(lambda)))
        .find(|d| *d > 1u32 && d < lambda)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Point;

    #[test]
    fn finds_shared_factor() {
        // 899 = 29 * 31
        let la = Integer::from(899);
        let d = extract_divisor(&Point::from([29, 31, 5, 1]), &la);
        assert_eq!(d, Some(Integer::from(29)));
    }

    #[test]
    fn reports_first_nontrivial_coordinate() {
        let la = Integer::from(899);
        let d = extract_divisor(&Point::from([7, 62, 3, 1]), &la);
        assert_eq!(d, Some(Integer::from(31))); // gcd(62, 899) = 31
    }

    #[test]
    fn trivial_gcds_yield_none() {
        let la = Integer::from(899);
        assert_eq!(extract_divisor(&Point::from([1, 2, 3, 4]), &la), None);
    }

    #[test]
    fn zero_coordinate_is_not_a_witness() {
        // gcd(0, la) = la, excluded by d < la
        let la = Integer::from(899);
        assert_eq!(extract_divisor(&Point::from([0, 0, 0, 1]), &la), None);
    }

    #[test]
    fn prime_modulus_never_yields_a_witness() {
        let la = Integer::from(179);
        for coords in [[1i64, 2, 3, 4], [178, 90, 45, 13], [0, 178, 1, 177]] {
            assert_eq!(extract_divisor(&Point::from(coords), &la), None);
        }
    }

    #[test]
    fn divisor_divides() {
        let la = Integer::from(4499); // 11 * 409
        let d = extract_divisor(&Point::from([818, 5, 7, 1]), &la).unwrap();
        assert_eq!(d, 409);
        assert!(la.is_divisible(&d));
    }
}
