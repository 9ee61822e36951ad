//! Constraining and testing values against bounds.
//!
//! Unlike [`f64::clamp`], nothing here panics on reversed or NaN bounds.

/// Clamps `value` to `[lower, upper]`.
///
/// The lower bound is applied first, then the upper, so `upper` wins when
/// the bounds are reversed. A NaN `value` is returned as NaN.
///
/// # Examples
/// ```
/// use u_numkit::bounds::clamp;
/// assert_eq!(clamp(-10.0, -5.0, 5.0), -5.0);
/// assert_eq!(clamp(10.0, -5.0, 5.0), 5.0);
/// assert_eq!(clamp(3.0, -5.0, 5.0), 3.0);
/// ```
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    clamp_max(clamp_min(value, lower), upper)
}

/// Clamps `value` to at most `upper`.
///
/// # Examples
/// ```
/// use u_numkit::bounds::clamp_max;
/// assert_eq!(clamp_max(10.0, 5.0), 5.0);
/// assert_eq!(clamp_max(-10.0, 5.0), -10.0);
/// ```
pub fn clamp_max(value: f64, upper: f64) -> f64 {
    if value > upper {
        upper
    } else {
        value
    }
}

fn clamp_min(value: f64, lower: f64) -> f64 {
    if value < lower {
        lower
    } else {
        value
    }
}

/// Checks whether `value` lies in the half-open interval between `start`
/// and `end`.
///
/// The bounds are ordered first, so `in_range(v, 5.0, 1.0)` tests
/// `[1, 5)`. Any NaN argument gives `false`.
///
/// # Examples
/// ```
/// use u_numkit::bounds::in_range;
/// assert!(in_range(3.0, 1.0, 5.0));
/// assert!(!in_range(5.0, 1.0, 5.0));
/// assert!(in_range(-3.0, -2.0, -6.0));
/// ```
pub fn in_range(value: f64, start: f64, end: f64) -> bool {
    let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
    lo <= value && value < hi
}

/// Checks whether `value` lies in `[0, end)` (or `[end, 0)` for a
/// negative `end`).
///
/// # Examples
/// ```
/// use u_numkit::bounds::in_range_to;
/// assert!(in_range_to(3.0, 5.0));
/// assert!(!in_range_to(4.0, 2.0));
/// assert!(in_range_to(-1.5, -3.0));
/// ```
pub fn in_range_to(value: f64, end: f64) -> bool {
    in_range(value, 0.0, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_basic() {
        assert_eq!(clamp(-10.0, -5.0, 5.0), -5.0);
        assert_eq!(clamp(10.0, -5.0, 5.0), 5.0);
        assert_eq!(clamp(0.5, -5.0, 5.0), 0.5);
        assert_eq!(clamp(5.0, -5.0, 5.0), 5.0);
    }

    #[test]
    fn test_clamp_reversed_bounds_does_not_panic() {
        assert_eq!(clamp(0.0, 5.0, -5.0), -5.0);
        assert_eq!(clamp(10.0, 5.0, -5.0), -5.0);
    }

    #[test]
    fn test_clamp_nan() {
        assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
        assert_eq!(clamp(3.0, f64::NAN, 1.0), 1.0);
        assert_eq!(clamp(0.5, 0.0, f64::NAN), 0.5);
    }

    #[test]
    fn test_clamp_infinite_bounds() {
        assert_eq!(clamp(1e300, f64::NEG_INFINITY, f64::INFINITY), 1e300);
        assert_eq!(clamp(f64::INFINITY, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_max_only() {
        assert_eq!(clamp_max(10.0, 5.0), 5.0);
        assert_eq!(clamp_max(f64::NEG_INFINITY, 5.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_in_range_bounds() {
        assert!(in_range(3.0, 1.0, 5.0));
        assert!(in_range(1.0, 1.0, 5.0));
        assert!(!in_range(5.0, 1.0, 5.0));
        assert!(!in_range(0.0, 1.0, 5.0));
    }

    #[test]
    fn test_in_range_swapped() {
        assert!(in_range(3.0, 5.0, 1.0));
        assert!(in_range(1.0, 5.0, 1.0));
        assert!(!in_range(5.0, 5.0, 1.0));
    }

    #[test]
    fn test_in_range_empty_interval() {
        assert!(!in_range(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_in_range_nan() {
        assert!(!in_range(f64::NAN, 0.0, 1.0));
        assert!(!in_range(0.5, f64::NAN, 1.0));
        assert!(!in_range(0.5, 0.0, f64::NAN));
    }

    #[test]
    fn test_in_range_to() {
        assert!(in_range_to(0.0, 5.0));
        assert!(!in_range_to(5.0, 5.0));
        assert!(in_range_to(-2.0, -3.0));
        assert!(!in_range_to(0.0, -3.0));
    }
}
