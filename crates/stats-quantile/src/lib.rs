//! Order statistics: percentiles, median and quartiles
//!
//! # Features
//!
//! - **Linear-interpolation percentile**: the inclusive (R-7) definition, with
//!   `percentile(x, 0)` the minimum and `percentile(x, 100)` the maximum
//! - **Median and quartiles**: Tukey's hinges by default, or percentile-based
//!   quartiles via [`QuartileMethod::Linear`]
//!
//! Every routine sorts a private copy; the caller's slice is never reordered.
//!
//! # Example
//!
//! ```rust
//! use stats_quantile::{median, percentile, quartiles, QuartileMethod};
//!
//! let data = vec![1, 2, 3, 4, 5];
//! assert_eq!(percentile(&data, 50.0).unwrap(), median(&data));
//! assert_eq!(quartiles(&data, QuartileMethod::Hinges), (2.0, 4.0));
//! ```

pub mod order;
pub mod percentile;

pub use order::{
    first_quartile, median, median_sorted, quartiles, third_quartile, QuartileMethod,
};
pub use percentile::{percentile, percentile_sorted, percentiles};
