//! Aggregation and extrema over slices.
//!
//! Every function here handles empty input with a sentinel instead of
//! panicking: `sum` gives `0.0`, `mean` and `median` give NaN, `max` and
//! `min` give `None`. Non-finite elements propagate per IEEE-754.
//!
//! The `*_by` variants map each element through an iteratee first and
//! never mutate the source slice.

/// Sums `data` left to right.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `0.0` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    sum_by(data, |&x| x)
}

/// Sums the values produced by `iteratee` for each element of `items`.
///
/// # Examples
/// ```
/// use u_numkit::stats::sum_by;
/// struct Line { qty: u32, price: f64 }
/// let lines = [Line { qty: 2, price: 1.5 }, Line { qty: 1, price: 4.0 }];
/// assert_eq!(sum_by(&lines, |l| l.qty as f64 * l.price), 7.0);
/// ```
pub fn sum_by<T, F>(items: &[T], iteratee: F) -> f64
where
    F: Fn(&T) -> f64,
{
    items.iter().fold(0.0, |acc, item| acc + iteratee(item))
}

/// Computes the arithmetic mean of `data`.
///
/// # Returns
/// - NaN if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(data: &[f64]) -> f64 {
    mean_by(data, |&x| x)
}

/// Computes the mean of the values produced by `iteratee`.
///
/// # Returns
/// - NaN if `items` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::mean_by;
/// let pairs = [(1, 2.0), (2, 4.0), (3, 9.0)];
/// assert_eq!(mean_by(&pairs, |p| p.1), 5.0);
/// ```
pub fn mean_by<T, F>(items: &[T], iteratee: F) -> f64
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return f64::NAN;
    }
    sum_by(items, iteratee) / items.len() as f64
}

/// Computes the median of `data` without mutating the input.
///
/// Sorts a copy, then returns the middle element (or the mean of the two
/// middle elements for even-length data).
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - NaN if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_numkit::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    median_by(data, |&x| x)
}

/// Computes the median of the values produced by `iteratee`.
///
/// # Returns
/// - NaN if `items` is empty or any mapped value is NaN.
///
/// # Examples
/// ```
/// use u_numkit::stats::median_by;
/// let ages = [("ann", 31.0), ("bo", 22.0), ("cy", 45.0), ("di", 28.0)];
/// assert_eq!(median_by(&ages, |a| a.1), 29.5);
/// ```
pub fn median_by<T, F>(items: &[T], iteratee: F) -> f64
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return f64::NAN;
    }
    let mut values: Vec<f64> = items.iter().map(iteratee).collect();
    if values.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    values.sort_unstable_by(f64::total_cmp);
    let n = values.len();
    if n % 2 == 1 {
        values[n / 2]
    } else {
        midpoint(values[n / 2 - 1], values[n / 2])
    }
}

/// Average of `a` and `b` that does not overflow for large finite inputs.
fn midpoint(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total.is_finite() {
        total / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Returns the largest element of `data`.
///
/// Single left-to-right scan; a later element replaces the current best
/// only if it compares strictly greater, so the first of equal maxima is
/// kept and an incomparable element (NaN) is skipped.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(5.0));
/// assert_eq!(max(&[2, 7, 1]), Some(7));
/// assert_eq!(max::<f64>(&[]), None);
/// ```
pub fn max<T: PartialOrd + Copy>(data: &[T]) -> Option<T> {
    extremum(data, |candidate, best| candidate > best)
}

/// Returns the smallest element of `data`.
///
/// See [`max`] for the scan and tie rules.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_numkit::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// assert_eq!(min::<i32>(&[]), None);
/// ```
pub fn min<T: PartialOrd + Copy>(data: &[T]) -> Option<T> {
    extremum(data, |candidate, best| candidate < best)
}

fn extremum<T, F>(data: &[T], better: F) -> Option<T>
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().fold(first, |best, candidate| {
        if better(candidate, &best) {
            *candidate
        } else {
            best
        }
    }))
}

// ============================================================================
// Tests
// ============================================================================
