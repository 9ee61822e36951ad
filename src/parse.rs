//! Lenient integer parsing.
//!
//! Parses the longest run of digits after optional whitespace, sign and
//! `0x` prefix, and ignores whatever follows, so `"42px"` reads as `42`.
//! The result is an `f64` so that overlong inputs degrade in precision
//! instead of overflowing.

use crate::error::{NumericError, Result};

/// Parses `value` as an integer in the given `radix`.
///
/// - Leading and trailing whitespace is ignored.
/// - One leading `+` or `-` is accepted.
/// - With `radix` of `None` or `Some(0)`, a `0x`/`0X` prefix selects
///   hexadecimal and anything else decimal. `Some(16)` also skips the prefix.
/// - Parsing stops at the first character that is not a digit in `radix`.
///
/// # Returns
/// - NaN if `radix` is outside `2..=36` or no digit could be read.
///
/// # Examples
/// ```
/// use u_numkit::parse::parse_int;
/// assert_eq!(parse_int(" 0x1F ", None), 31.0);
/// assert_eq!(parse_int("42abc", None), 42.0);
/// assert_eq!(parse_int("-101", Some(2)), -5.0);
/// assert!(parse_int("abc", None).is_nan());
/// ```
pub fn parse_int(value: &str, radix: Option<u32>) -> f64 {
    try_parse_int(value, radix).unwrap_or(f64::NAN)
}

/// Like [`parse_int`], but reports why parsing failed.
///
/// # Errors
/// - [`NumericError::InvalidRadix`] if `radix` is not `0` or in `2..=36`.
/// - [`NumericError::NoDigits`] if no digit follows the sign and prefix.
///
/// # Examples
/// ```
/// use u_numkit::error::NumericError;
/// use u_numkit::parse::try_parse_int;
/// assert_eq!(try_parse_int("ff", Some(16)), Ok(255.0));
/// assert_eq!(try_parse_int("12", Some(1)), Err(NumericError::InvalidRadix { radix: 1 }));
/// assert!(matches!(try_parse_int("  -", None), Err(NumericError::NoDigits { .. })));
/// ```
pub fn try_parse_int(value: &str, radix: Option<u32>) -> Result<f64> {
    let trimmed = value.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match radix.unwrap_or(0) {
        0 => match strip_hex_prefix(unsigned) {
            Some(rest) => (16, rest),
            None => (10, unsigned),
        },
        16 => (16, strip_hex_prefix(unsigned).unwrap_or(unsigned)),
        r @ 2..=36 => (r, unsigned),
        r => {
            log::debug!("rejecting parse of {value:?}: radix {r} out of range");
            return Err(NumericError::invalid_radix(r));
        }
    };

    // Digits are ASCII, so the char count is also the byte length.
    let len = digits.chars().take_while(|c| c.is_digit(radix)).count();
    if len == 0 {
        return Err(NumericError::no_digits(value));
    }
    let digits = &digits[..len];

    let magnitude = if radix == 10 {
        // Correctly rounded, unlike digit-by-digit accumulation past 2^53.
        digits
            .parse::<f64>()
            .map_err(|_| NumericError::no_digits(value))?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0_f64, |acc, d| acc * f64::from(radix) + f64::from(d))
    };
    Ok(if negative { -magnitude } else { magnitude })
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_int("42", None), 42.0);
        assert_eq!(parse_int("  42  ", None), 42.0);
        assert_eq!(parse_int("\t\n-17\r\n", None), -17.0);
        assert_eq!(parse_int("+8", None), 8.0);
        assert_eq!(parse_int("007", None), 7.0);
    }

    #[test]
    fn test_trailing_garbage_is_ignored() {
        assert_eq!(parse_int("42abc", None), 42.0);
        assert_eq!(parse_int("3.99", None), 3.0);
        assert_eq!(parse_int("1e3", None), 1.0);
        assert_eq!(parse_int("12 34", None), 12.0);
    }

    #[test]
    fn test_hex_detection() {
        assert_eq!(parse_int(" 0x1F ", None), 31.0);
        assert_eq!(parse_int("0XfF", None), 255.0);
        assert_eq!(parse_int("-0x10", None), -16.0);
        assert_eq!(parse_int("0x1F", Some(0)), 31.0);
        assert_eq!(parse_int("0x1F", Some(16)), 31.0);
        assert_eq!(parse_int("1F", Some(16)), 31.0);
    }

    #[test]
    fn test_prefix_only_with_hex_radix() {
        // Base 10 reads the leading zero and stops at `x`.
        assert_eq!(parse_int("0x1F", Some(10)), 0.0);
        assert!(parse_int("0x", None).is_nan());
    }

    #[test]
    fn test_explicit_radix() {
        assert_eq!(parse_int("101", Some(2)), 5.0);
        assert_eq!(parse_int("777", Some(8)), 511.0);
        assert_eq!(parse_int("zz", Some(36)), 1295.0);
        assert_eq!(parse_int("102", Some(2)), 2.0);
    }

    #[test]
    fn test_unparsable_is_nan() {
        assert!(parse_int("abc", None).is_nan());
        assert!(parse_int("", None).is_nan());
        assert!(parse_int("   ", None).is_nan());
        assert!(parse_int("-", None).is_nan());
        assert!(parse_int("+-1", None).is_nan());
        assert!(parse_int("2", Some(2)).is_nan());
    }

    #[test]
    fn test_invalid_radix() {
        assert!(parse_int("10", Some(1)).is_nan());
        assert!(parse_int("10", Some(37)).is_nan());
        assert_eq!(
            try_parse_int("10", Some(37)),
            Err(NumericError::InvalidRadix { radix: 37 })
        );
    }

    #[test]
    fn test_no_digits_error_keeps_input() {
        assert_eq!(
            try_parse_int(" abc ", None),
            Err(NumericError::NoDigits {
                input: " abc ".to_string()
            })
        );
    }

    #[test]
    fn test_negative_zero() {
        let z = parse_int("-0", None);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_negative());
    }

    #[test]
    fn test_large_decimal_is_correctly_rounded() {
        let big = parse_int("123456789012345678901234567890", None);
        assert_eq!(big, 123_456_789_012_345_678_901_234_567_890.0);
        assert_eq!(parse_int("9007199254740993", None), 9_007_199_254_740_992.0);
        assert_eq!(
            parse_int("-18446744073709551617abc", None),
            -18_446_744_073_709_551_616.0
        );
    }

    #[test]
    fn test_non_ascii_stops_parse() {
        assert_eq!(parse_int("12٣", None), 12.0);
        assert!(parse_int("٣", None).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn parses_formatted_integers(n in -1_000_000_000_i64..1_000_000_000) {
            prop_assert_eq!(parse_int(&n.to_string(), None), n as f64);
            prop_assert_eq!(parse_int(&format!("  {n}xyz "), None), n as f64);
        }

        #[test]
        fn parses_hex_with_prefix(n in 0_u32..u32::MAX) {
            prop_assert_eq!(parse_int(&format!("0x{n:x}"), None), n as f64);
            prop_assert_eq!(parse_int(&format!("{n:X}"), Some(16)), n as f64);
        }

        #[test]
        fn decimal_matches_std_float_parse(digits in "[0-9]{1,40}") {
            let expected: f64 = digits.parse().unwrap();
            prop_assert_eq!(parse_int(&digits, None), expected);
            prop_assert_eq!(parse_int(&format!("-{digits}.5"), Some(10)), -expected);
        }

        #[test]
        fn never_panics(s in ".{0,20}", radix in proptest::option::of(0_u32..40)) {
            let _ = parse_int(&s, radix);
        }
    }
}
