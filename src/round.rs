//! Rounding to a number of decimal places.
//!
//! # Algorithm
//!
//! Scaling by `10^precision` before rounding inherits the representation
//! error of the scaled product: `1.005 * 100.0` is `100.49999999999999`,
//! so a naive `round(1.005, 2)` yields `1.0`. Instead, the value is
//! written in its shortest round-trip scientific form (`1.005e0`), the
//! decimal exponent is shifted (`1.005e2`), and the shifted string is
//! parsed back. The parse sees the exact decimal `100.5`, which rounds as
//! expected. The result is shifted back the same way.

/// Largest magnitude accepted for `precision`; larger values are clamped.
///
/// Beyond this the shifted exponent leaves the range of `f64`.
pub const MAX_PRECISION: i32 = 292;

/// Direction used when a value falls between two representable results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward positive infinity.
    Up,
    /// Toward negative infinity.
    Down,
    /// To the nearest result, ties away from zero.
    Nearest,
}

impl RoundingMode {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            RoundingMode::Up => x.ceil(),
            RoundingMode::Down => x.floor(),
            RoundingMode::Nearest => x.round(),
        }
    }
}

/// Rounds `value` to `precision` decimal places using `mode`.
///
/// A negative `precision` rounds to tens, hundreds, and so on. `precision`
/// is clamped to `[-MAX_PRECISION, MAX_PRECISION]`.
///
/// # Returns
/// - `value` unchanged if it is NaN or infinite.
///
/// # Examples
/// ```
/// use u_numkit::round::{round_to, RoundingMode};
/// assert_eq!(round_to(1.005, 2, RoundingMode::Nearest), 1.01);
/// assert_eq!(round_to(4060.0, -2, RoundingMode::Up), 4100.0);
/// assert!(round_to(f64::NAN, 2, RoundingMode::Down).is_nan());
/// ```
pub fn round_to(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let precision = precision.clamp(-MAX_PRECISION, MAX_PRECISION);
    if precision == 0 {
        return mode.apply(value);
    }

    let shifted = shift_decimal(value, precision);
    if !shifted.is_finite() {
        // A finite value with more than MAX_PRECISION integer digits has no
        // fractional part left to round.
        return value;
    }
    shift_decimal(mode.apply(shifted), -precision)
}

/// Rounds `value` up to `precision` decimal places.
///
/// # Examples
/// ```
/// use u_numkit::round::ceil;
/// assert_eq!(ceil(4.006, 0), 5.0);
/// assert_eq!(ceil(6.004, 2), 6.01);
/// assert_eq!(ceil(6040.0, -2), 6100.0);
/// ```
pub fn ceil(value: f64, precision: i32) -> f64 {
    round_to(value, precision, RoundingMode::Up)
}

/// Rounds `value` down to `precision` decimal places.
///
/// # Examples
/// ```
/// use u_numkit::round::floor;
/// assert_eq!(floor(4.006, 0), 4.0);
/// assert_eq!(floor(0.046, 2), 0.04);
/// assert_eq!(floor(4060.0, -2), 4000.0);
/// ```
pub fn floor(value: f64, precision: i32) -> f64 {
    round_to(value, precision, RoundingMode::Down)
}

/// Rounds `value` to `precision` decimal places, ties away from zero.
///
/// # Examples
/// ```
/// use u_numkit::round::round;
/// assert_eq!(round(4.006, 0), 4.0);
/// assert_eq!(round(4.006, 2), 4.01);
/// assert_eq!(round(-2.5, 0), -3.0);
/// ```
pub fn round(value: f64, precision: i32) -> f64 {
    round_to(value, precision, RoundingMode::Nearest)
}

/// Multiplies `value` by `10^by` by editing its decimal exponent.
fn shift_decimal(value: f64, by: i32) -> f64 {
    let repr = format!("{value:e}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };
    format!("{mantissa}e{}", exponent + by)
        .parse()
        .unwrap_or(value)
}

// ============================================================================
// Tests
// ============================================================================
