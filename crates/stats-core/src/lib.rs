//! Core types and elementary aggregates for basic statistical analysis
//!
//! This crate provides the pieces every other crate in the workspace builds on:
//!
//! - [`Error`] and [`Result`], the single error type of the workspace
//! - [`Numeric`], the trait for accepted element types
//! - elementary aggregates ([`sum`], [`mean`], [`geo_mean`])
//! - selection helpers ([`filter`], [`filter_by`])
//!
//! # Degenerate input
//!
//! Empty samples are not an error. Aggregates of an empty slice are `0.0`
//! and filters of an empty slice are empty.
//!
//! # Example
//!
//! ```rust
//! use stats_core::{filter, mean, sum};
//!
//! let data = vec![1, 2, 3, 4, 5];
//! assert_eq!(sum(&data), 15.0);
//! assert_eq!(mean(&filter(&data, |x| x > 3)), 4.5);
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod numeric;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::{to_f64_vec, Numeric};

pub use aggregate::{geo_mean, mean, sum};
pub use filter::{filter, filter_by};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
