//! Numeric element types accepted by the statistics functions
//!
//! Every function in the workspace accepts a slice of any [`Numeric`] type and
//! reports its result as `f64`. Integer samples are widened before any
//! arithmetic, so sums of large integer samples do not overflow.

use num_traits::{Num, NumCast};
use std::fmt::Debug;

/// Base trait for numeric types that can be used in statistical computations
pub trait Numeric: Num + NumCast + Copy + PartialOrd + Debug + Send + Sync {
    /// Convert to f64 for aggregate operations
    fn to_f64(self) -> f64;
}

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_numeric!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Widen a sample to `f64`
pub fn to_f64_vec<T: Numeric>(data: &[T]) -> Vec<f64> {
    data.iter().map(|&x| x.to_f64()).collect()
}
