//! High-level API for bootstrap confidence intervals
//!
//! Single-call functions for the common cases. Each builds a [`Bootstrap`]
//! from its arguments and delegates to it, so the argument checks happen
//! before any sample is inspected.

use crate::{bootstrap::Bootstrap, statistic::StatisticOutput, ConfidenceInterval};
use stats_core::{Numeric, Result};

pub use crate::bootstrap::DEFAULT_ITERATIONS;

/// Bootstrap confidence interval for a statistic of one sample
///
/// # Arguments
/// * `sample` - Data sample
/// * `statistic` - Function evaluated on every resample
/// * `confidence_level` - Confidence level in percent, strictly inside (0, 100)
/// * `iterations` - Number of bootstrap resamples, see [`DEFAULT_ITERATIONS`]
///
/// # Errors
/// Out-of-range confidence level, zero iterations, or any error returned by
/// `statistic`.
///
/// # Example
/// ```rust
/// use stats_confidence::{confidence_interval, DEFAULT_ITERATIONS};
/// use stats_core::mean;
///
/// let sample = vec![12.1, 11.8, 12.4, 12.0, 11.9, 12.3];
/// let ci = confidence_interval(&sample, mean::<f64>, 95.0, DEFAULT_ITERATIONS).unwrap();
/// assert!(ci.lower <= ci.upper);
///
/// assert!(confidence_interval(&sample, mean::<f64>, 100.0, 10).is_err());
/// ```
pub fn confidence_interval<T, F, R>(
    sample: &[T],
    statistic: F,
    confidence_level: f64,
    iterations: usize,
) -> Result<ConfidenceInterval>
where
    T: Numeric,
    F: Fn(&[T]) -> R + Sync,
    R: StatisticOutput,
{
    Bootstrap::new()
        .with_confidence_level(confidence_level)?
        .with_iterations(iterations)?
        .confidence_interval(sample, statistic)
}

/// Bootstrap confidence interval for `statistic(sample_a) - statistic(sample_b)`
///
/// # Example
/// ```rust
/// use stats_confidence::confidence_interval_two_sample;
/// use stats_core::mean;
///
/// let ci = confidence_interval_two_sample(&[1.0, 2.0, 3.0], &[], mean::<f64>, 95.0, 1024).unwrap();
/// assert_eq!(ci.as_tuple(), (0.0, 0.0));
/// ```
pub fn confidence_interval_two_sample<T, F, R>(
    sample_a: &[T],
    sample_b: &[T],
    statistic: F,
    confidence_level: f64,
    iterations: usize,
) -> Result<ConfidenceInterval>
where
    T: Numeric,
    F: Fn(&[T]) -> R + Sync,
    R: StatisticOutput,
{
    Bootstrap::new()
        .with_confidence_level(confidence_level)?
        .with_iterations(iterations)?
        .two_sample_confidence_interval(sample_a, sample_b, statistic)
}

/// Seeded variant of [`confidence_interval`], reproducible across runs
pub fn confidence_interval_seeded<T, F, R>(
    sample: &[T],
    statistic: F,
    confidence_level: f64,
    iterations: usize,
    seed: u64,
) -> Result<ConfidenceInterval>
where
    T: Numeric,
    F: Fn(&[T]) -> R + Sync,
    R: StatisticOutput,
{
    Bootstrap::new()
        .with_confidence_level(confidence_level)?
        .with_iterations(iterations)?
        .with_seed(seed)
        .confidence_interval(sample, statistic)
}

/// Seeded variant of [`confidence_interval_two_sample`]
pub fn confidence_interval_two_sample_seeded<T, F, R>(
    sample_a: &[T],
    sample_b: &[T],
    statistic: F,
    confidence_level: f64,
    iterations: usize,
    seed: u64,
) -> Result<ConfidenceInterval>
where
    T: Numeric,
    F: Fn(&[T]) -> R + Sync,
    R: StatisticOutput,
{
    Bootstrap::new()
        .with_confidence_level(confidence_level)?
        .with_iterations(iterations)?
        .with_seed(seed)
        .two_sample_confidence_interval(sample_a, sample_b, statistic)
}
