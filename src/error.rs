//! Error type for the fallible entry points.
//!
//! Most functions in this crate report degenerate input through sentinel
//! values (`NaN`, `None`, an empty `Vec`). The `try_*` variants return
//! [`NumericError`] instead so callers can tell failures apart.

use thiserror::Error;

/// Errors reported by the fallible `try_*` functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Radix outside `2..=36` (after resolving `0` to auto-detection).
    #[error("invalid radix {radix}: must be 0 or in 2..=36")]
    InvalidRadix { radix: u32 },

    /// No digit valid for the radix was found after the sign and prefix.
    #[error("no digits to parse in {input:?}")]
    NoDigits { input: String },
}

/// Result alias using [`NumericError`].
pub type Result<T> = std::result::Result<T, NumericError>;

impl NumericError {
    pub fn invalid_radix(radix: u32) -> Self {
        Self::InvalidRadix { radix }
    }

    pub fn no_digits(input: impl Into<String>) -> Self {
        Self::NoDigits {
            input: input.into(),
        }
    }
}
