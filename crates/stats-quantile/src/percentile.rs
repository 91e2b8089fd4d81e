//! Linear-interpolation percentile estimator
//!
//! Implements the "inclusive" definition (type 7 in Hyndman & Fan): the rank
//! `r = p / 100 * (n - 1)` is located between the order statistics
//! `x[floor(r)]` and `x[ceil(r)]`, and the result is linearly interpolated
//! between them. At `p = 0` this is the minimum, at `p = 100` the maximum and
//! at `p = 50` the median.

use stats_core::{utils::sorted, Error, Numeric, Result};

/// Percentile of a sample, `p` in [0, 100]
///
/// Sorts a private copy of the sample; the input is left untouched. An empty
/// sample yields `0.0`.
///
/// # Errors
///
/// [`Error::OutOfRange`] if `p` is outside [0, 100] or NaN.
///
/// # Examples
///
/// ```rust
/// use stats_quantile::percentile;
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(percentile(&data, 50.0).unwrap(), 3.0);
/// assert_eq!(percentile(&data, 25.0).unwrap(), 2.0);
/// assert!(percentile(&data, 110.0).is_err());
/// ```
pub fn percentile<T: Numeric>(data: &[T], p: f64) -> Result<f64> {
    Error::check_percentile(p)?;
    if data.is_empty() {
        return Ok(0.0);
    }
    percentile_sorted(&sorted(data), p)
}

/// Percentile of data that is already sorted ascending
///
/// Skips the private copy made by [`percentile`]. Same range check and empty
/// behaviour.
pub fn percentile_sorted(sorted_data: &[f64], p: f64) -> Result<f64> {
    Error::check_percentile(p)?;
    Ok(interpolate(sorted_data, p))
}

/// Several percentiles of one sample, sorting it only once
///
/// Every rank is validated before any work is done.
pub fn percentiles<T: Numeric>(data: &[T], ps: &[f64]) -> Result<Vec<f64>> {
    for &p in ps {
        Error::check_percentile(p)?;
    }
    if data.is_empty() {
        return Ok(vec![0.0; ps.len()]);
    }
    let sorted_data = sorted(data);
    Ok(ps.iter().map(|&p| interpolate(&sorted_data, p)).collect())
}

/// Interpolated value at percentile `p` of sorted data
///
/// `p` must already be validated.
pub(crate) fn interpolate(sorted_data: &[f64], p: f64) -> f64 {
    let n = sorted_data.len();
    if n == 0 {
        return 0.0;
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let lo = (rank.floor() as usize).min(n - 1);
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;

    // Rank lands on the last element, or exactly on an order statistic
    if hi >= n || weight == 0.0 {
        return sorted_data[lo];
    }

    sorted_data[lo] + weight * (sorted_data[hi] - sorted_data[lo])
}
