//! Order statistics, dispersion measures and bootstrap confidence intervals
//!
//! This crate re-exports the workspace members under one roof:
//!
//! - [`core`]: error type, numeric trait, sums/means, filters
//! - [`quantile`]: percentile, median, quartiles
//! - [`spread`]: variance, standard deviation, range, IQR
//! - [`confidence`]: resampling and percentile bootstrap intervals
//!
//! # Example
//!
//! ```rust
//! use basic_stats::prelude::*;
//!
//! let data = vec![1, 2, 3, 4, 5];
//! assert_eq!(percentile(&data, 50.0).unwrap(), median(&data));
//! assert_eq!(variance(&data), 2.0);
//!
//! let ci = Bootstrap::new()
//!     .with_seed(42)
//!     .confidence_interval(&data, mean::<i32>)
//!     .unwrap();
//! assert!(ci.lower <= ci.upper);
//! ```

pub use stats_confidence as confidence;
pub use stats_core as core;
pub use stats_quantile as quantile;
pub use stats_spread as spread;

pub use stats_core::{Error, Numeric, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use stats_confidence::{
        confidence_interval, confidence_interval_seeded, confidence_interval_two_sample,
        confidence_interval_two_sample_seeded, resample, Bootstrap, ConfidenceInterval,
        ConfidenceLevel, DEFAULT_ITERATIONS,
    };
    pub use stats_core::{filter, filter_by, geo_mean, mean, sum, Error, Numeric, Result};
    pub use stats_quantile::{
        first_quartile, median, percentile, quartiles, third_quartile, QuartileMethod,
    };
    pub use stats_spread::{coeff_of_variation, iqr, range, stdev, variance};
}
