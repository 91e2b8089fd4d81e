//! Dispersion measures for statistical analysis
//!
//! This crate provides classical estimators of scale/spread:
//! - Variance and standard deviation (population form)
//! - Coefficient of variation
//! - Range
//! - IQR (Interquartile Range)
//!
//! # Estimator Properties
//!
//! | Estimator | Breakdown Point | Use When |
//! |-----------|----------------|----------|
//! | Std Dev | 0% | Data is clean, normal |
//! | Range | 0% | Bounds of the observed data matter |
//! | IQR | 25% | Moderate robustness needed |
//!
//! # Example
//!
//! ```rust
//! use stats_spread::{iqr, range, stdev};
//!
//! let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // Outlier!
//!
//! assert!(stdev(&sample) > 30.0);
//! assert_eq!(range(&sample), 99.0);
//! assert_eq!(iqr(&sample), 3.0); // ignores the outlier
//! ```

pub mod iqr;
pub mod moments;

pub use iqr::{iqr, iqr_with, range};
pub use moments::{coeff_of_variation, stdev, variance};
