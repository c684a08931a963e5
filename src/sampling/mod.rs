//! Selection of parameter angles on a closed curve.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Returns `n` evenly spaced angles `i * 2*pi / n` over `[0, 2*pi)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn uniform_angles(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 * TAU / n as f64).collect()
}

/// Returns `n` evenly spaced angles over `[0, 2*pi]`, both ends included.
///
/// Suitable for drawing a closed curve: the last point repeats the first.
#[must_use]
pub fn closed_angles(n: usize) -> Vec<f64> {
    linspace(0.0, TAU, n)
}

/// Returns `n` evenly spaced values over `[start, end]`, both ends included.
///
/// The last value is exactly `end`. A single sample yields `[start]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            let span = end - start;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + span * (i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Returns `n` angles drawn uniformly from `[0, 2*pi)`, sorted ascending.
///
/// The same `seed` always yields the same angles.
#[must_use]
pub fn random_angles(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut angles: Vec<f64> = (0..n).map(|_| rng.random_range(0.0..TAU)).collect();
    angles.sort_by(f64::total_cmp);
    angles
}

/// Returns the caller's angles sorted ascending.
#[must_use]
pub fn custom_angles<I: IntoIterator<Item = f64>>(angles: I) -> Vec<f64> {
    let mut angles: Vec<f64> = angles.into_iter().collect();
    angles.sort_by(f64::total_cmp);
    angles
}
