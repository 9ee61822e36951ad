//! Bounded random numbers.
//!
//! The plain functions ([`random`], [`random_int`]) draw from
//! [`rand::rng`], a thread-local generator seeded lazily from the OS on
//! first use; there is nothing to initialise or tear down. The `*_with`
//! variants take any [`Rng`] so results can be made reproducible.
//!
//! # Inclusive vs. exclusive upper bound
//!
//! Integer results include the upper bound; floating-point results
//! exclude it. `random(0.0, 10.0, false)` can return `10.0`,
//! `random(0.0, 10.0, true)` cannot.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// `2^63`, the first whole `f64` that no longer fits in an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_with};
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(random_with(&mut a, 0.0, 100.0, true), random_with(&mut b, 0.0, 100.0, true));
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Returns a random number between `lower` and `upper` using the
/// thread-local generator.
///
/// See [`random_with`] for the exact contract.
///
/// # Examples
/// ```
/// use u_numkit::random::random;
/// let x = random(0.0, 5.0, false);
/// assert!(x.fract() == 0.0 && (0.0..=5.0).contains(&x));
/// let y = random(1.2, 5.2, false);
/// assert!((1.2..5.2).contains(&y));
/// ```
pub fn random(lower: f64, upper: f64, floating: bool) -> f64 {
    random_with(&mut rand::rng(), lower, upper, floating)
}

/// Returns a random number between `lower` and `upper` drawn from `rng`.
///
/// Reversed bounds are swapped. When `floating` is false and both bounds
/// are whole numbers, the result is a whole number in `[lower, upper]`.
/// Otherwise it is a float in `[lower, upper)`, or `lower` when the
/// bounds are equal.
///
/// # Returns
/// - NaN if either bound is NaN or infinite.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_with};
/// let mut rng = create_rng(7);
/// let x = random_with(&mut rng, 10.0, 0.0, true);
/// assert!((0.0..10.0).contains(&x));
/// ```
pub fn random_with<R: Rng>(rng: &mut R, lower: f64, upper: f64, floating: bool) -> f64 {
    if !(lower.is_finite() && upper.is_finite()) {
        log::debug!("non-finite random bounds ({lower}, {upper}); returning NaN");
        return f64::NAN;
    }
    let (lo, hi) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };

    let whole = lo.fract() == 0.0 && hi.fract() == 0.0;
    if floating || !whole {
        return uniform_half_open(rng, lo, hi);
    }
    if lo >= -I64_LIMIT && hi < I64_LIMIT {
        // Both bounds are whole and in range, so the casts are exact.
        return rng.random_range(lo as i64..=hi as i64) as f64;
    }
    let u: f64 = rng.random();
    lerp(lo, hi, u).round().clamp(lo, hi)
}

/// Returns a random integer in `[lower, upper]` using the thread-local
/// generator.
///
/// # Examples
/// ```
/// use u_numkit::random::random_int;
/// let n = random_int(1, 6);
/// assert!((1..=6).contains(&n));
/// ```
pub fn random_int(lower: i64, upper: i64) -> i64 {
    random_int_with(&mut rand::rng(), lower, upper)
}

/// Returns a uniformly distributed integer in `[lower, upper]` drawn from
/// `rng`. Reversed bounds are swapped.
///
/// No cryptographic guarantee.
pub fn random_int_with<R: Rng>(rng: &mut R, lower: i64, upper: i64) -> i64 {
    let (lo, hi) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };
    rng.random_range(lo..=hi)
}

/// Uniform float in `[lo, hi)`; `lo` when the interval is empty.
fn uniform_half_open<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo >= hi {
        return lo;
    }
    loop {
        let u: f64 = rng.random();
        let x = lerp(lo, hi, u);
        // Rounding can land exactly on `hi`; redraw.
        if x < hi {
            return x;
        }
    }
}

/// Interpolates without forming `hi - lo`, which can overflow.
#[inline]
fn lerp(lo: f64, hi: f64, u: f64) -> f64 {
    lo * (1.0 - u) + hi * u
}

// ============================================================================
// Tests
// ============================================================================
