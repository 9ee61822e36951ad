//! # u-numkit
//!
//! Small numeric helpers for plain `f64` values and slices.
//!
//! Each function is an independent leaf: nothing is cached, nothing is
//! shared between calls, and only the random generators touch state (a
//! lazily seeded thread-local RNG).
//!
//! ## Modules
//!
//! - [`round`]: `ceil`/`floor`/`round` to a number of decimal places
//! - [`bounds`]: clamping and half-open interval tests
//! - [`stats`]: `sum`, `mean`, `median` (with `*_by` variants), `max`, `min`
//! - [`sequence`]: `range` and `range_right` arithmetic sequences
//! - [`random`]: bounded random floats and integers
//! - [`parse`]: lenient integer parsing with radix detection
//! - [`error`]: error type for the fallible `try_*` functions
//!
//! ## Design Philosophy
//!
//! - **Sentinels over panics**: empty or malformed input yields NaN,
//!   `None` or an empty `Vec`, never a panic
//! - **Decimal-exact rounding**: `round(1.005, 2) == 1.01`
//! - **Property-based testing**: invariants verified via proptest
//!
//! ```
//! use u_numkit::{round::round, stats::median, sequence::range_right};
//! assert_eq!(round(1.005, 2), 1.01);
//! assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
//! assert_eq!(range_right(0.0, 3.0, 1.0), vec![2.0, 1.0, 0.0]);
//! ```

pub mod bounds;
pub mod error;
pub mod parse;
pub mod random;
pub mod round;
pub mod sequence;
pub mod stats;

pub use error::{NumericError, Result};
