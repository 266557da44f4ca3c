//! Float comparison helpers for tests.
//!
//! Two comparison modes: absolute tolerance ([`assert_approx_eq`]) for
//! values with a known scale, and ULP distance ([`assert_ulp_le`],
//! [`assert_ulp_lt!`](crate::assert_ulp_lt)) for checking that two
//! computations agree to within a handful of representable values
//! regardless of magnitude.

/// Maps a float onto the integer number line so that ULP distance is a
/// plain integer difference. Negative floats sort below positives.
#[inline]
pub fn ordered_bits(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

/// Number of representable `f64` values between `a` and `b`.
#[inline]
pub fn ulp_distance(a: f64, b: f64) -> u64 {
    ordered_bits(a).abs_diff(ordered_bits(b))
}

/// Asserts `a` and `b` differ by at most `max_ulp` representable values.
///
/// Both values must be finite; `ctx` is included in the failure message.
#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}: a={}, b={}",
        ctx,
        a,
        b
    );
    let distance = ulp_distance(a, b);
    assert!(
        distance <= max_ulp,
        "{}: {} ULP apart (max {}), a={:e} b={:e}",
        ctx,
        distance,
        max_ulp,
        a,
        b
    );
}

/// Asserts `a` and `b` are within an absolute tolerance.
#[track_caller]
pub fn assert_approx_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "{} and {} differ by {:e} (tolerance {:e})",
        a,
        b,
        (a - b).abs(),
        tolerance
    );
}

/// ULP assertion with the compared expressions in the failure message.
#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!("{} vs {}", stringify!($a), stringify!($b)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_distance_adjacent() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_distance(a, b), 1);
        assert_eq!(ulp_distance(a, a), 0);
    }

    #[test]
    fn test_ulp_distance_across_zero() {
        let tiny = f64::from_bits(1);
        assert_eq!(ulp_distance(-tiny, tiny), 2);
    }

    #[test]
    fn test_assert_ulp_le_passes() {
        assert_ulp_le(1.0, 1.0 + f64::EPSILON, 8, "adjacent values");
        assert_ulp_lt!(0.1 + 0.2, 0.3, 4);
    }

    #[test]
    #[should_panic]
    fn test_assert_ulp_le_fails() {
        assert_ulp_le(1.0, 1.1, 4, "far apart");
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0 + 1e-13, 1e-12);
    }
}
