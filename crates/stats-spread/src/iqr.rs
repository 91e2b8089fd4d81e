//! Interquartile range and total range

use stats_core::{utils::min_max, Numeric};
use stats_quantile::{quartiles, QuartileMethod};

/// Interquartile range, `Q3 - Q1`, using Tukey's hinges
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use stats_spread::iqr;
///
/// assert_eq!(iqr(&[1, 2, 3, 4, 5, 6]), 3.0);
/// assert_eq!(iqr(&[1, 2, 3, 4, 5]), 2.0);
/// ```
pub fn iqr<T: Numeric>(data: &[T]) -> f64 {
    iqr_with(data, QuartileMethod::Hinges)
}

/// Interquartile range with an explicit quartile method
pub fn iqr_with<T: Numeric>(data: &[T], method: QuartileMethod) -> f64 {
    let (q1, q3) = quartiles(data, method);
    q3 - q1
}

/// Difference between the largest and smallest element
///
/// Returns 0.0 for empty slices.
pub fn range<T: Numeric>(data: &[T]) -> f64 {
    min_max(data).map_or(0.0, |(min, max)| max - min)
}
