//! Bootstrap confidence interval estimation
//!
//! This crate estimates confidence intervals for arbitrary statistics with
//! the percentile bootstrap:
//!
//! 1. resample the data with replacement, `iterations` times
//! 2. evaluate the statistic on every resample
//! 3. take the `alpha / 2` and `100 - alpha / 2` percentiles of the results
//!
//! A two-sample variant bounds the difference `statistic(a) - statistic(b)`.
//!
//! # Overview
//!
//! The statistic is any function value `Fn(&[T]) -> f64` or
//! `Fn(&[T]) -> Result<f64, E>`; errors it returns abort the estimate and
//! reach the caller unchanged. Empty samples give a `(0, 0)` interval without
//! evaluating the statistic. Confidence levels are percentages in (0, 100).
//!
//! Each call owns its random generator. A seed makes the result
//! reproducible, including under the `parallel` feature.
//!
//! # Examples
//!
//! ## Single sample
//!
//! ```rust
//! use stats_confidence::{confidence_interval_seeded, DEFAULT_ITERATIONS};
//! use stats_quantile::median;
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let ci = confidence_interval_seeded(&sample, median::<f64>, 95.0, DEFAULT_ITERATIONS, 42).unwrap();
//! println!("95% CI for median: [{:.2}, {:.2}]", ci.lower, ci.upper);
//! assert!(ci.lower >= 1.0 && ci.upper <= 10.0);
//! ```
//!
//! ## Difference of means
//!
//! ```rust
//! use stats_confidence::Bootstrap;
//! use stats_core::mean;
//!
//! let before = [10.2, 9.8, 10.5, 10.1, 9.9];
//! let after = [11.0, 11.4, 10.9, 11.2, 11.3];
//!
//! let ci = Bootstrap::new()
//!     .with_seed(1)
//!     .two_sample_confidence_interval(&after, &before, mean::<f64>)
//!     .unwrap();
//! assert!(ci.lower > 0.0);
//! ```

pub mod api;
mod bootstrap;
mod resample;
mod statistic;
mod types;

// Re-exports
pub use api::{
    confidence_interval, confidence_interval_seeded, confidence_interval_two_sample,
    confidence_interval_two_sample_seeded, DEFAULT_ITERATIONS,
};
pub use bootstrap::Bootstrap;
pub use resample::{iteration_seed, resample, resample_with};
pub use statistic::StatisticOutput;
pub use types::{ConfidenceInterval, ConfidenceLevel};
