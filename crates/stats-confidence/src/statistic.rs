//! Return types accepted from caller-supplied statistics
//!
//! A statistic is any `Fn(&[T]) -> R`. Plain `f64` statistics such as
//! `stats_core::mean` are infallible; a statistic that can fail returns
//! `Result<f64, E>` and its error is handed back to the caller unchanged.

use stats_core::{Error, Result};

/// Value produced by one evaluation of a statistic
pub trait StatisticOutput {
    /// Convert into the workspace result type
    fn into_statistic(self) -> Result<f64>;
}

impl StatisticOutput for f64 {
    #[inline]
    fn into_statistic(self) -> Result<f64> {
        Ok(self)
    }
}

impl<E> StatisticOutput for std::result::Result<f64, E>
where
    E: Into<Error>,
{
    #[inline]
    fn into_statistic(self) -> Result<f64> {
        self.map_err(Into::into)
    }
}
