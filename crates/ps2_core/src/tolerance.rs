//! Float comparison used when grading float-valued tasks.

/// Absolute tolerance for float-valued checks.
pub const TOLERANCE: f64 = 0.01;

/// Check whether `actual` lies strictly within `epsilon` of `expected`.
///
/// ## Returns
/// - (`bool`): `|actual - expected| < epsilon`. Any NaN operand yields `false`.
///
/// ## Examples
/// ```rust
/// use ps2_core::{approx_eq, TOLERANCE};
/// assert!(approx_eq(0.216, 0.22, TOLERANCE));
/// assert!(!approx_eq(0.23, 0.22, TOLERANCE));
/// ```
#[inline]
pub fn approx_eq(actual: f64, expected: f64, epsilon: f64) -> bool {
    (actual - expected).abs() < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_is_strict() {
        assert!(!approx_eq(1.5, 1.0, 0.5));
        assert!(approx_eq(1.25, 1.0, 0.5));
    }

    #[test]
    fn test_symmetric_around_expected() {
        assert!(approx_eq(2.005, 2.0, TOLERANCE));
        assert!(approx_eq(1.995, 2.0, TOLERANCE));
        assert!(!approx_eq(2.02, 2.0, TOLERANCE));
        assert!(!approx_eq(1.98, 2.0, TOLERANCE));
    }

    #[test]
    fn test_nan_never_matches() {
        assert!(!approx_eq(f64::NAN, 0.0, TOLERANCE));
        assert!(!approx_eq(0.0, f64::NAN, TOLERANCE));
    }
}
