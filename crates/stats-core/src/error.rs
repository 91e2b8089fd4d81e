//! Error types for basic statistical analysis
//!
//! Provides a unified error type for all basic-stats crates.

use thiserror::Error;

/// Core error type for statistical operations
///
/// Empty input is not an error anywhere in the workspace: aggregates return
/// `0.0` and the bootstrap returns a `(0, 0)` interval. Errors are reserved
/// for arguments that are outside their domain.
#[derive(Error, Debug)]
pub enum Error {
    /// A percentile rank or confidence level outside its valid domain
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Arguments that are individually valid but unusable together
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A caller-supplied statistic failed to evaluate
    #[error("Statistic error: {0}")]
    Statistic(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a percentile rank outside [0, 100]
    pub fn percentile_out_of_range(p: f64) -> Self {
        Self::OutOfRange(format!("Percentile {p} must be in [0, 100]"))
    }

    /// Create an error for a confidence level outside (0, 100)
    pub fn confidence_level_out_of_range(level: f64) -> Self {
        Self::OutOfRange(format!("Confidence level {level} must be in (0, 100)"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidArgument(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Check that a percentile rank lies in [0, 100]
    ///
    /// NaN is rejected.
    pub fn check_percentile(p: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&p) {
            return Err(Self::percentile_out_of_range(p));
        }
        Ok(())
    }

    /// Check that a confidence level lies strictly inside (0, 100)
    pub fn check_confidence_level(level: f64) -> Result<()> {
        if !(level > 0.0 && level < 100.0) {
            return Err(Self::confidence_level_out_of_range(level));
        }
        Ok(())
    }

    /// Whether this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    /// Whether this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
