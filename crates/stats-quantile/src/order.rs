//! Median and quartiles
//!
//! All routines sort a private copy of the sample and return `0.0` for empty
//! input.

use crate::percentile::interpolate;
use stats_core::{utils::sorted, Numeric};

/// How the first and third quartiles are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuartileMethod {
    /// Tukey's hinges: median of the lower and upper half of the sorted data.
    ///
    /// For even `n` the halves are the first and last `n / 2` elements. For
    /// odd `n` the median element belongs to both halves.
    #[default]
    Hinges,
    /// The 25th and 75th percentile under linear interpolation, consistent
    /// with [`percentile`](crate::percentile).
    Linear,
}

/// Median of a sample
///
/// For even lengths the midpoint of the two middle elements, interpolated
/// exactly as `percentile(data, 50.0)` does.
///
/// # Examples
///
/// ```rust
/// use stats_quantile::median;
///
/// assert_eq!(median(&[1, 3, 2, 5, 4]), 3.0);
/// assert_eq!(median(&[1, 2, 3, 4]), 2.5);
/// ```
pub fn median<T: Numeric>(data: &[T]) -> f64 {
    median_sorted(&sorted(data))
}

/// Median of data already sorted ascending
pub fn median_sorted(sorted_data: &[f64]) -> f64 {
    let n = sorted_data.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        interpolate(sorted_data, 50.0)
    } else {
        sorted_data[n / 2]
    }
}

/// First and third quartile, `(q1, q3)`
pub fn quartiles<T: Numeric>(data: &[T], method: QuartileMethod) -> (f64, f64) {
    if data.is_empty() {
        return (0.0, 0.0);
    }
    let sorted_data = sorted(data);

    match method {
        QuartileMethod::Hinges => {
            let (lower, upper) = halves(&sorted_data);
            (median_sorted(lower), median_sorted(upper))
        }
        QuartileMethod::Linear => (
            interpolate(&sorted_data, 25.0),
            interpolate(&sorted_data, 75.0),
        ),
    }
}

/// First quartile using [`QuartileMethod::Hinges`]
pub fn first_quartile<T: Numeric>(data: &[T]) -> f64 {
    quartiles(data, QuartileMethod::Hinges).0
}

/// Third quartile using [`QuartileMethod::Hinges`]
pub fn third_quartile<T: Numeric>(data: &[T]) -> f64 {
    quartiles(data, QuartileMethod::Hinges).1
}

// Odd lengths share the median element between both halves
fn halves(sorted_data: &[f64]) -> (&[f64], &[f64]) {
    let n = sorted_data.len();
    let half = n / 2;
    if n % 2 == 0 {
        (&sorted_data[..half], &sorted_data[half..])
    } else {
        (&sorted_data[..=half], &sorted_data[half..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percentile;

    #[test]
    fn test_median() {
        assert_eq!(median(&[1, 3, 2, 5, 4]), 3.0);
        assert_eq!(median(&[1, 2, 3, 4]), 2.5);
        assert_eq!(median::<i32>(&[]), 0.0);
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![9, 1, 5];
        assert_eq!(median(&data), 5.0);
        assert_eq!(data, vec![9, 1, 5]);
    }

    #[test]
    fn test_first_quartile() {
        assert_eq!(first_quartile(&[1, 2, 3, 4, 5, 6]), 2.0);
        assert_eq!(first_quartile(&[1, 2, 3, 4, 5]), 2.0);
        assert_eq!(first_quartile::<i32>(&[]), 0.0);
    }

    #[test]
    fn test_third_quartile() {
        assert_eq!(third_quartile(&[1, 2, 3, 4, 5, 6]), 5.0);
        assert_eq!(third_quartile(&[1, 2, 3, 4, 5]), 4.0);
        assert_eq!(third_quartile::<i32>(&[]), 0.0);
    }

    #[test]
    fn test_quartiles_unsorted_input() {
        assert_eq!(quartiles(&[6, 1, 5, 2, 4, 3], QuartileMethod::Hinges), (2.0, 5.0));
    }

    #[test]
    fn test_quartiles_single_element() {
        assert_eq!(quartiles(&[7.0], QuartileMethod::Hinges), (7.0, 7.0));
        assert_eq!(quartiles(&[7.0], QuartileMethod::Linear), (7.0, 7.0));
    }

    #[test]
    fn test_linear_quartiles_match_percentile() {
        let data = [1, 2, 3, 4, 5, 6];
        let (q1, q3) = quartiles(&data, QuartileMethod::Linear);
        assert_eq!(q1, percentile(&data, 25.0).unwrap());
        assert_eq!(q3, percentile(&data, 75.0).unwrap());
        assert_eq!((q1, q3), (2.25, 4.75));
    }

    #[test]
    fn test_median_matches_percentile_50() {
        for data in [vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 3.0, 1.0], vec![2.0], vec![0.1, 0.5]] {
            assert_eq!(median(&data), percentile(&data, 50.0).unwrap());
        }
        assert_eq!(median(&[0.1, 0.5]), 0.1 + 0.5 * (0.5 - 0.1));
    }

    #[test]
    fn test_median_of_huge_values_does_not_overflow() {
        assert_eq!(median(&[f64::MAX, f64::MAX]), f64::MAX);
        assert_eq!(first_quartile(&[f64::MAX; 4]), f64::MAX);
    }
}
