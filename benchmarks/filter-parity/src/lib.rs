//! Reproducible input signals for the benchmarks.

use rand::prelude::*;
use rand_distr::Normal;
use std::f64::consts::PI;

/// Sum of a 5-cycle and a 40-cycle sine over `size` samples, plus Gaussian
/// noise with standard deviation 0.2.
pub fn generate_noisy_signal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            (2.0 * PI * 5.0 * t).sin()
                + 0.5 * (2.0 * PI * 40.0 * t).sin()
                + noise_dist.sample(&mut rng)
        })
        .collect()
}
