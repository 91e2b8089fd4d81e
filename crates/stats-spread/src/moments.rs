//! Second-moment dispersion: variance, standard deviation, coefficient of variation

use stats_core::{mean, Numeric};

/// Population variance, the mean squared deviation from the mean
///
/// Divides by `n`, not `n - 1`. Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use stats_spread::variance;
///
/// assert_eq!(variance(&[1, 2, 3, 4, 5]), 2.0);
/// ```
pub fn variance<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let sum_squared_diff: f64 = data
        .iter()
        .map(|&x| {
            let diff = x.to_f64() - m;
            diff * diff
        })
        .sum();
    sum_squared_diff / data.len() as f64
}

/// Population standard deviation
pub fn stdev<T: Numeric>(data: &[T]) -> f64 {
    variance(data).sqrt()
}

/// Coefficient of variation, standard deviation relative to the mean
///
/// Returns 0.0 for empty slices. A zero mean gives an infinite or NaN result,
/// the same as the underlying division.
pub fn coeff_of_variation<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    stdev(data) / mean(data)
}
