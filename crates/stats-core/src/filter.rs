//! Predicate-based selection of sample elements

use crate::{Error, Result};

/// Elements of `data` that satisfy `predicate`, in their original order
///
/// # Examples
///
/// ```rust
/// use stats_core::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5], |x| x > 3), vec![4, 5]);
/// ```
pub fn filter<T, P>(data: &[T], predicate: P) -> Vec<T>
where
    T: Copy,
    P: Fn(T) -> bool,
{
    data.iter().copied().filter(|&x| predicate(x)).collect()
}

/// Elements of `data` whose co-indexed `criteria` element satisfies `predicate`
///
/// `data[i]` is kept when `predicate(criteria[i])` holds. Both slices must
/// have the same length.
///
/// # Examples
///
/// ```rust
/// use stats_core::filter_by;
///
/// let kept = filter_by(&[1, 2, 3, 4, 5], &[10, 20, 30, 40, 50], |c| c > 30).unwrap();
/// assert_eq!(kept, vec![4, 5]);
/// ```
pub fn filter_by<T, C, P>(data: &[T], criteria: &[C], predicate: P) -> Result<Vec<T>>
where
    T: Copy,
    C: Copy,
    P: Fn(C) -> bool,
{
    if data.len() != criteria.len() {
        return Err(Error::size_mismatch(data.len(), criteria.len(), "filter criteria"));
    }

    Ok(data
        .iter()
        .zip(criteria)
        .filter(|&(_, &c)| predicate(c))
        .map(|(&x, _)| x)
        .collect())
}
