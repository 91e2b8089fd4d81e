//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Generate normally distributed data from a fixed seed
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Sample sizes covering the degenerate and small cases
pub fn small_lengths() -> Vec<usize> {
    vec![1, 2, 3, 5, 8, 13]
}
