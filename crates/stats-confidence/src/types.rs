//! Common types for confidence intervals

use stats_core::{Error, Result};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// Confidence level in percent (e.g., 95.0 for a 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            confidence_level,
        }
    }

    /// The `(0, 0)` interval reported for empty input
    pub fn degenerate(confidence_level: f64) -> Self {
        Self::new(0.0, 0.0, confidence_level)
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Centre of the interval
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Bounds as a `(lower, upper)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }
}

impl From<ConfidenceInterval> for (f64, f64) {
    fn from(ci: ConfidenceInterval) -> Self {
        ci.as_tuple()
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% CI: [{:.4}, {:.4}]",
            self.confidence_level, self.lower, self.upper
        )
    }
}

/// Confidence level in percent, validated to lie in (0, 100)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `level` is not strictly inside (0, 100)
    pub fn new(level: f64) -> Result<Self> {
        Error::check_confidence_level(level)?;
        Ok(Self(level))
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Probability mass outside the interval, in percent
    pub fn alpha(&self) -> f64 {
        100.0 - self.0
    }

    /// Percentile of the lower bound, `alpha / 2`
    pub fn tail_percentile(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Percentile of the upper bound, `100 - alpha / 2`
    pub fn upper_percentile(&self) -> f64 {
        100.0 - self.tail_percentile()
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(90.0);
    pub const NINETY_FIVE: Self = Self(95.0);
    pub const NINETY_NINE: Self = Self(99.0);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
