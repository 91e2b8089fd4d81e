//! Resampling with replacement
//!
//! Every call owns its generator. An explicit seed makes the draw
//! reproducible; without one the generator is seeded from the operating
//! system's entropy source, so independent calls never share state.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Same-length sample drawn uniformly with replacement
///
/// # Examples
///
/// ```rust
/// use stats_confidence::resample;
///
/// let data = [1.0, 2.0, 3.0];
/// let drawn = resample(&data, Some(42));
/// assert_eq!(drawn.len(), 3);
/// assert!(drawn.iter().all(|x| data.contains(x)));
/// assert_eq!(drawn, resample(&data, Some(42)));
/// ```
pub fn resample<T: Copy>(data: &[T], seed: Option<u64>) -> Vec<T> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    resample_with(data, &mut rng)
}

/// Same-length sample drawn with the caller's generator
///
/// Indices are drawn from `[0, len)`; the output keeps draw order.
pub fn resample_with<T: Copy, R: Rng + ?Sized>(data: &[T], rng: &mut R) -> Vec<T> {
    if data.is_empty() {
        return Vec::new();
    }

    let dist = Uniform::new(0, data.len());
    (0..data.len()).map(|_| data[dist.sample(&mut *rng)]).collect()
}

/// Seed for one bootstrap iteration, derived from a base seed
///
/// SplitMix64 over `base_seed + counter * golden_gamma`. Neighbouring
/// counters give uncorrelated seeds, so iteration `i` draws the same resample
/// whichever thread runs it.
#[inline]
pub fn iteration_seed(base_seed: u64, counter: u64) -> u64 {
    let mut z = base_seed.wrapping_add(counter.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
