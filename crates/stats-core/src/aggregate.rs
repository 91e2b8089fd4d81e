//! Elementary aggregates: sum, arithmetic mean, geometric mean

use crate::Numeric;

/// Sum of the sample, accumulated in `f64`
pub fn sum<T: Numeric>(data: &[T]) -> f64 {
    data.iter().map(|&x| x.to_f64()).sum()
}

/// Arithmetic mean
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use stats_core::mean;
///
/// assert_eq!(mean(&[1, 2, 3, 4, 5]), 3.0);
/// assert_eq!(mean::<f64>(&[]), 0.0);
/// ```
pub fn mean<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    sum(data) / data.len() as f64
}

/// Geometric mean, the n-th root of the product
///
/// Returns 0.0 for empty slices.
pub fn geo_mean<T: Numeric>(data: &[T]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let product: f64 = data.iter().map(|&x| x.to_f64()).product();
    product.powf(1.0 / data.len() as f64)
}
