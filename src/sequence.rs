//! Arithmetic sequence generation.
//!
//! Element `i` of a sequence is computed as `start + i * step` rather than
//! by repeated addition, so long fractional sequences do not drift.
//!
//! A zero or non-finite step, and non-finite bounds, produce an empty
//! sequence instead of an endless one.

use std::iter::FusedIterator;

/// Lazy arithmetic sequence from `start` toward (but excluding) `end`.
///
/// Iterates from either end; `range` collects it forward and
/// `range_right` collects it backward.
///
/// # Examples
/// ```
/// use u_numkit::sequence::Steps;
/// let s = Steps::new(0.0, 1.0, 0.25);
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.rev().collect::<Vec<_>>(), vec![0.75, 0.5, 0.25, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Steps {
    start: f64,
    step: f64,
    front: usize,
    back: usize,
}

impl Steps {
    /// Creates the sequence `start, start + step, ...` stopping before `end`.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            step,
            front: 0,
            back: step_count(start, end, step),
        }
    }

    #[inline]
    fn nth_value(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }
}

impl Iterator for Steps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.nth_value(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Steps {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.nth_value(self.back))
    }
}

impl ExactSizeIterator for Steps {}

impl FusedIterator for Steps {}

/// Number of elements in `[start, end)` stepping by `step`.
fn step_count(start: f64, end: f64, step: f64) -> usize {
    if !(start.is_finite() && end.is_finite() && step.is_finite()) {
        log::debug!("non-finite range arguments ({start}, {end}, {step}); yielding empty sequence");
        return 0;
    }
    if step == 0.0 {
        log::debug!("zero step for range {start}..{end}; yielding empty sequence");
        return 0;
    }
    let n = ((end - start) / step).ceil();
    if n <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast.
    let n = n as usize;
    let before_end = |i: usize| {
        let x = start + i as f64 * step;
        if step > 0.0 {
            x < end
        } else {
            x > end
        }
    };
    if before_end(n - 1) {
        return n;
    }
    // The quotient rounded up past the last element strictly before `end`.
    // Elements are monotone in `i`, so binary-search the cut.
    let (mut lo, mut hi) = (0, n - 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if before_end(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Builds the ascending-index sequence `start, start + step, ...` up to
/// but not including `end`.
///
/// `step` may be negative when `end < start`. If the step points away
/// from `end`, or is zero, the result is empty.
///
/// # Complexity
/// Time: O(n), Space: O(n)
///
/// # Panics
/// Panics with a capacity overflow if the sequence is too long to
/// allocate, e.g. `range(0.0, 1e300, 1.0)`. Iterate [`Steps`] instead
/// when the length is not known to be small.
///
/// # Examples
/// ```
/// use u_numkit::sequence::range;
/// assert_eq!(range(0.0, 5.0, 1.0), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(range(0.0, 20.0, 5.0), vec![0.0, 5.0, 10.0, 15.0]);
/// assert_eq!(range(0.0, -4.0, -1.0), vec![0.0, -1.0, -2.0, -3.0]);
/// assert!(range(1.0, 4.0, 0.0).is_empty());
/// ```
pub fn range(start: f64, end: f64, step: f64) -> Vec<f64> {
    Steps::new(start, end, step).collect()
}

/// Builds `0, ±1, ±2, ...` up to but not including `end`, counting down
/// when `end` is negative.
///
/// # Examples
/// ```
/// use u_numkit::sequence::range_to;
/// assert_eq!(range_to(4.0), vec![0.0, 1.0, 2.0, 3.0]);
/// assert_eq!(range_to(-3.0), vec![0.0, -1.0, -2.0]);
/// assert!(range_to(0.0).is_empty());
/// ```
pub fn range_to(end: f64) -> Vec<f64> {
    range(0.0, end, unit_step_toward(end))
}

/// Same elements as [`range`], emitted in reverse order.
///
/// # Examples
/// ```
/// use u_numkit::sequence::range_right;
/// assert_eq!(range_right(0.0, 5.0, 1.0), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
/// assert_eq!(range_right(0.0, 20.0, 5.0), vec![15.0, 10.0, 5.0, 0.0]);
/// ```
pub fn range_right(start: f64, end: f64, step: f64) -> Vec<f64> {
    Steps::new(start, end, step).rev().collect()
}

/// Same elements as [`range_to`], emitted in reverse order.
///
/// # Examples
/// ```
/// use u_numkit::sequence::range_right_to;
/// assert_eq!(range_right_to(4.0), vec![3.0, 2.0, 1.0, 0.0]);
/// assert_eq!(range_right_to(-3.0), vec![-2.0, -1.0, 0.0]);
/// ```
pub fn range_right_to(end: f64) -> Vec<f64> {
    range_right(0.0, end, unit_step_toward(end))
}

fn unit_step_toward(end: f64) -> f64 {
    if end < 0.0 {
        -1.0
    } else {
        1.0
    }
}
