//! Utility functions for working with data slices

use crate::Numeric;
use std::cmp::Ordering;

/// Ordering for `f64` that places NaN after every other value
#[inline]
pub fn nan_last_cmp(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort a private `f64` copy of the data
///
/// The caller's slice is never reordered. NaN values are placed at the end.
///
/// # Examples
///
/// ```rust
/// use stats_core::utils::sorted;
///
/// let data = vec![3, 1, 5, 2, 4];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Numeric>(data: &[T]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().map(|&x| x.to_f64()).collect();
    sorted.sort_unstable_by(nan_last_cmp);
    sorted
}

/// Minimum and maximum of the data in one pass
///
/// Returns `None` for an empty slice.
pub fn min_max<T: Numeric>(data: &[T]) -> Option<(f64, f64)> {
    let mut iter = data.iter().map(|&x| x.to_f64());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
}
