//! Bootstrap confidence intervals for a few statistics of simulated data
//!
//! Run with `RUST_LOG=stats_confidence=debug` to see the engine's logging.

use rand::prelude::*;
use rand_distr::{LogNormal, Normal};
use stats_confidence::{Bootstrap, ConfidenceInterval};
use stats_core::{mean, Result};
use stats_quantile::{median, percentile};
use stats_spread::{iqr, stdev};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(2024);
    let control: Vec<f64> = {
        let dist = Normal::new(100.0, 15.0).map_err(anyhow::Error::from)?;
        (0..250).map(|_| dist.sample(&mut rng)).collect()
    };
    let latency: Vec<f64> = {
        let dist = LogNormal::new(3.0, 0.6).map_err(anyhow::Error::from)?;
        (0..250).map(|_| dist.sample(&mut rng)).collect()
    };

    let bootstrap = Bootstrap::new()
        .with_iterations(4096)?
        .with_confidence_level(95.0)?
        .with_seed(7);

    report("mean(control)", bootstrap.confidence_interval(&control, mean::<f64>)?);
    report("stdev(control)", bootstrap.confidence_interval(&control, stdev::<f64>)?);
    report("median(latency)", bootstrap.confidence_interval(&latency, median::<f64>)?);
    report("iqr(latency)", bootstrap.confidence_interval(&latency, iqr::<f64>)?);
    report(
        "p99(latency)",
        bootstrap.confidence_interval(&latency, |s: &[f64]| percentile(s, 99.0))?,
    );
    report(
        "median(latency) - median(control)",
        bootstrap.two_sample_confidence_interval(&latency, &control, median::<f64>)?,
    );

    Ok(())
}

fn report(label: &str, ci: ConfidenceInterval) {
    println!("{label:>36}: {ci}  (width {:.4})", ci.width());
}
