//! Percentile bootstrap for arbitrary statistics
//!
//! This module provides the bootstrap engine. For each iteration it:
//! - draws a resample (two independently seeded ones for two-sample
//!   comparisons)
//! - evaluates the caller's statistic on it
//! - stores the scalar result
//!
//! The interval bounds are the `alpha / 2` and `100 - alpha / 2` percentiles
//! of the collected results.

use crate::{
    resample::{iteration_seed, resample_with},
    statistic::StatisticOutput,
    ConfidenceInterval, ConfidenceLevel,
};
use rand::prelude::*;
use stats_core::{utils::nan_last_cmp, Error, Numeric, Result};
use stats_quantile::percentile_sorted;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default number of bootstrap iterations
pub const DEFAULT_ITERATIONS: usize = 1024;

/// Bootstrap engine configuration
///
/// ```rust
/// use stats_confidence::Bootstrap;
/// use stats_core::mean;
///
/// let bootstrap = Bootstrap::new()
///     .with_iterations(2000)?
///     .with_confidence_level(90.0)?
///     .with_seed(7);
///
/// let ci = bootstrap.confidence_interval(&[2.0, 4.0, 4.0, 5.0, 7.0], mean::<f64>)?;
/// assert!(ci.lower <= ci.upper);
/// # Ok::<(), stats_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bootstrap {
    iterations: usize,
    confidence_level: ConfidenceLevel,
    seed: Option<u64>,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            confidence_level: ConfidenceLevel::NINETY_FIVE,
            seed: None,
        }
    }
}

impl Bootstrap {
    /// Create a new bootstrap engine with 1024 iterations at 95% confidence
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bootstrap iterations
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `iterations` is zero
    pub fn with_iterations(mut self, iterations: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(Error::InvalidArgument(
                "Number of bootstrap iterations must be positive".to_string(),
            ));
        }
        self.iterations = iterations;
        Ok(self)
    }

    /// Set the confidence level, in percent
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `level` is not strictly inside (0, 100)
    pub fn with_confidence_level(mut self, level: f64) -> Result<Self> {
        self.confidence_level = ConfidenceLevel::new(level)?;
        Ok(self)
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of iterations per interval
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Configured confidence level
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Configured seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Confidence interval for `statistic` evaluated on `sample`
    ///
    /// An empty sample gives the `(0, 0)` interval without evaluating the
    /// statistic. An error from the statistic aborts the whole computation,
    /// and so does a NaN value ([`Error::Statistic`]).
    #[instrument(skip(self, sample, statistic),
                 fields(n = sample.len(), iterations = self.iterations))]
    pub fn confidence_interval<T, F, R>(&self, sample: &[T], statistic: F) -> Result<ConfidenceInterval>
    where
        T: Numeric,
        F: Fn(&[T]) -> R + Sync,
        R: StatisticOutput,
    {
        if sample.is_empty() {
            debug!("Empty sample, returning degenerate interval");
            return Ok(ConfidenceInterval::degenerate(self.confidence_level.value()));
        }

        let base_seed = self.base_seed();
        let results = self.run(|i| {
            let mut rng = StdRng::seed_from_u64(iteration_seed(base_seed, i as u64));
            let resampled = resample_with(sample, &mut rng);
            ordered(statistic(&resampled[..]).into_statistic()?, i)
        })?;

        self.interval(results)
    }

    /// Confidence interval for `statistic(sample_a) - statistic(sample_b)`
    ///
    /// Each iteration resamples both samples with independently seeded
    /// generators. If either sample is empty the `(0, 0)` interval is
    /// returned without evaluating the statistic.
    #[instrument(skip(self, sample_a, sample_b, statistic),
                 fields(n_a = sample_a.len(), n_b = sample_b.len(), iterations = self.iterations))]
    pub fn two_sample_confidence_interval<T, F, R>(
        &self,
        sample_a: &[T],
        sample_b: &[T],
        statistic: F,
    ) -> Result<ConfidenceInterval>
    where
        T: Numeric,
        F: Fn(&[T]) -> R + Sync,
        R: StatisticOutput,
    {
        if sample_a.is_empty() || sample_b.is_empty() {
            debug!("Empty sample(s), returning degenerate interval");
            return Ok(ConfidenceInterval::degenerate(self.confidence_level.value()));
        }

        let base_seed = self.base_seed();
        let results = self.run(|i| {
            let counter = 2 * i as u64;
            let mut rng_a = StdRng::seed_from_u64(iteration_seed(base_seed, counter));
            let mut rng_b = StdRng::seed_from_u64(iteration_seed(base_seed, counter + 1));

            let resampled_a = resample_with(sample_a, &mut rng_a);
            let stat_a = statistic(&resampled_a[..]).into_statistic()?;
            let resampled_b = resample_with(sample_b, &mut rng_b);
            let stat_b = statistic(&resampled_b[..]).into_statistic()?;

            ordered(stat_a - stat_b, i)
        })?;

        self.interval(results)
    }

    fn base_seed(&self) -> u64 {
        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!("Bootstrap base seed {} ({} iterations)", seed, self.iterations);
        seed
    }

    /// Evaluate every iteration, in iteration order
    #[cfg(not(feature = "parallel"))]
    fn run<G>(&self, evaluate: G) -> Result<Vec<f64>>
    where
        G: Fn(usize) -> Result<f64> + Sync,
    {
        let results = (0..self.iterations).map(evaluate).collect::<Result<Vec<f64>>>()?;
        debug_assert_eq!(results.len(), self.iterations);
        Ok(results)
    }

    /// Evaluate every iteration on the rayon pool, in iteration order
    #[cfg(feature = "parallel")]
    fn run<G>(&self, evaluate: G) -> Result<Vec<f64>>
    where
        G: Fn(usize) -> Result<f64> + Sync,
    {
        let results = (0..self.iterations)
            .into_par_iter()
            .map(&evaluate)
            .collect::<Result<Vec<f64>>>()?;
        debug_assert_eq!(results.len(), self.iterations);
        Ok(results)
    }

    /// Percentile interval of the bootstrap distribution
    fn interval(&self, mut results: Vec<f64>) -> Result<ConfidenceInterval> {
        results.sort_unstable_by(nan_last_cmp);

        let level = self.confidence_level;
        let lower = percentile_sorted(&results, level.tail_percentile())?;
        let upper = percentile_sorted(&results, level.upper_percentile())?;

        debug!("Bootstrap interval at {}: [{:.6}, {:.6}]", level, lower, upper);

        Ok(ConfidenceInterval::new(lower, upper, level.value()))
    }
}

/// Reject values that cannot be placed in the sorted bootstrap distribution
fn ordered(value: f64, iteration: usize) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::Statistic(format!(
            "statistic is NaN on bootstrap iteration {iteration}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use stats_core::mean;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_bootstrap_construction() {
        let bootstrap = Bootstrap::new()
            .with_iterations(1000)
            .unwrap()
            .with_confidence_level(90.0)
            .unwrap()
            .with_seed(42);

        assert_eq!(bootstrap.iterations(), 1000);
        assert_eq!(bootstrap.confidence_level().value(), 90.0);
        assert_eq!(bootstrap.seed(), Some(42));
    }

    #[test]
    fn test_defaults() {
        let bootstrap = Bootstrap::default();
        assert_eq!(bootstrap.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(bootstrap.confidence_level(), ConfidenceLevel::NINETY_FIVE);
        assert_eq!(bootstrap.seed(), None);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(Bootstrap::new().with_iterations(0).unwrap_err().is_invalid_argument());
        assert!(Bootstrap::new().with_confidence_level(100.0).unwrap_err().is_out_of_range());
        assert!(Bootstrap::new().with_confidence_level(0.0).is_err());
    }

    #[test]
    fn test_iteration_count() {
        let calls = AtomicUsize::new(0);
        let bootstrap = Bootstrap::new().with_iterations(77).unwrap().with_seed(1);

        bootstrap
            .confidence_interval(&[1.0, 2.0, 3.0], |s: &[f64]| {
                calls.fetch_add(1, Ordering::Relaxed);
                mean(s)
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 77);
    }

    #[test]
    fn test_two_sample_iteration_count() {
        let calls = AtomicUsize::new(0);
        let bootstrap = Bootstrap::new().with_iterations(10).unwrap().with_seed(1);

        bootstrap
            .two_sample_confidence_interval(&[1.0, 2.0], &[3.0, 4.0, 5.0], |s: &[f64]| {
                calls.fetch_add(1, Ordering::Relaxed);
                mean(s)
            })
            .unwrap();

        assert_eq!(calls.load(Ordering::Relaxed), 20);
    }

    #[test]
    fn test_constant_sample_gives_point_interval() {
        let bootstrap = Bootstrap::new().with_seed(3);
        let ci = bootstrap.confidence_interval(&[4.0; 10], mean::<f64>).unwrap();
        assert_eq!(ci.as_tuple(), (4.0, 4.0));
    }

    #[test]
    fn test_interval_from_results() {
        let bootstrap = Bootstrap::new().with_confidence_level(90.0).unwrap();
        let results: Vec<f64> = (1..=11).rev().map(|x| x as f64).collect();
        let ci = bootstrap.interval(results).unwrap();

        // rank 0.05 * 10 = 0.5 and 0.95 * 10 = 9.5
        assert_relative_eq!(ci.lower, 1.5, epsilon = 1e-12);
        assert_relative_eq!(ci.upper, 10.5, epsilon = 1e-12);
        assert_eq!(ci.confidence_level, 90.0);
    }

    #[test]
    fn test_nan_statistic_is_an_error() {
        let bootstrap = Bootstrap::new().with_seed(1);
        let err = bootstrap
            .confidence_interval(&[1.0, 2.0, 3.0], |_: &[f64]| f64::NAN)
            .unwrap_err();
        assert!(matches!(err, Error::Statistic(_)));

        // inf - inf
        let err = bootstrap
            .two_sample_confidence_interval(&[f64::INFINITY], &[f64::INFINITY], mean::<f64>)
            .unwrap_err();
        assert!(matches!(err, Error::Statistic(_)));
    }

    #[test]
    fn test_two_sample_identical_constant_samples() {
        let bootstrap = Bootstrap::new().with_seed(8);
        let ci = bootstrap
            .two_sample_confidence_interval(&[2; 5], &[2; 7], mean::<i32>)
            .unwrap();
        assert_eq!(ci.as_tuple(), (0.0, 0.0));
    }
}
