//! ULP comparisons for the ERFA cross-checks.

/// Maps a double onto a monotonic integer line so that adjacent values
/// differ by one. Both zeros sit next to each other.
fn ordinal(x: f64) -> i64 {
    let bits = x.to_bits() as i64;
    if bits < 0 {
        i64::MIN - bits
    } else {
        bits
    }
}

/// Number of representable doubles between `a` and `b`.
pub fn ulps_between(a: f64, b: f64) -> u64 {
    ordinal(a).abs_diff(ordinal(b))
}

#[track_caller]
pub fn assert_ulp_le(actual: f64, expected: f64, max_ulps: u64, what: &str) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "{what}: non-finite comparison {actual} vs {expected}"
    );
    let ulps = ulps_between(actual, expected);
    assert!(
        ulps <= max_ulps,
        "{what}: {actual:e} is {ulps} ulps from {expected:e} (limit {max_ulps})"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours_are_one_apart() {
        let x = 2.5_f64;
        let up = f64::from_bits(x.to_bits() + 1);
        assert_eq!(ulps_between(x, up), 1);
        assert_eq!(ulps_between(-x, -up), 1);
        assert_eq!(ulps_between(x, x), 0);
    }

    #[test]
    fn test_zeros() {
        assert_eq!(ulps_between(0.0, -0.0), 0);
        assert_eq!(ulps_between(-0.0, f64::from_bits(1)), 1);
        assert_eq!(ulps_between(-f64::from_bits(1), f64::from_bits(1)), 2);
    }

    #[test]
    #[should_panic(expected = "ulps from")]
    fn test_assert_rejects_distant_values() {
        assert_ulp_le(1.0, 1.0 + 1e-12, 2, "distant");
    }
}
