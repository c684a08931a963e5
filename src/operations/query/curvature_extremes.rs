use crate::error::{Result, SamplingError};
use crate::geometry::PlanarCurve;
use crate::sampling::uniform_angles;

use super::curvature::Radius;
use super::jet::Jet;

/// Unsigned curvature sampled at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureSample {
    /// Curve parameter.
    pub theta: f64,
    /// Unsigned curvature.
    pub curvature: f64,
    /// Radius of curvature.
    pub radius: Radius,
}

/// Samples curvature and radius of curvature along a sequence of angles.
///
/// Angles where the derivative vector vanishes are skipped.
pub struct CurvatureProfile<'a> {
    thetas: &'a [f64],
}

impl<'a> CurvatureProfile<'a> {
    /// Creates a new `CurvatureProfile` query.
    #[must_use]
    pub fn new(thetas: &'a [f64]) -> Self {
        Self { thetas }
    }

    /// Executes the query, returning samples in input order.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Vec<CurvatureSample> {
        self.thetas
            .iter()
            .filter_map(|&theta| match Jet::at(curve, theta).signed_curvature() {
                Ok(k) => Some(CurvatureSample {
                    theta,
                    curvature: k.abs(),
                    radius: Radius::from_curvature(k),
                }),
                Err(err) => {
                    tracing::warn!(theta, %err, "skipping curvature sample");
                    None
                }
            })
            .collect()
    }
}

/// Result of [`CurvatureExtremes`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureExtremesReport {
    /// Sample with the largest curvature (first one on ties).
    pub max: CurvatureSample,
    /// Sample with the smallest curvature (first one on ties).
    pub min: CurvatureSample,
    /// Arithmetic mean of the sampled curvatures.
    pub mean: f64,
}

/// Finds the largest and smallest curvature over evenly spaced angles.
///
/// The curve is sampled at `i * 2*pi / n` for `i in 0..n`. This is a discrete
/// approximation whose accuracy depends on `n`; it is deterministic for a
/// given `n`.
pub struct CurvatureExtremes {
    sample_count: usize,
}

impl CurvatureExtremes {
    /// Creates a new `CurvatureExtremes` query.
    #[must_use]
    pub fn new(sample_count: usize) -> Self {
        Self { sample_count }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EmptySample` if `sample_count` is zero, or
    /// `SamplingError::NoValidSamples` if every sampled angle is degenerate.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<CurvatureExtremesReport> {
        if self.sample_count == 0 {
            return Err(SamplingError::EmptySample.into());
        }
        let thetas = uniform_angles(self.sample_count);
        let samples = CurvatureProfile::new(&thetas).execute(curve);
        let Some(&first) = samples.first() else {
            return Err(SamplingError::NoValidSamples {
                requested: self.sample_count,
            }
            .into());
        };

        let mut max = first;
        let mut min = first;
        let mut sum = 0.0;
        for s in &samples {
            if s.curvature > max.curvature {
                max = *s;
            }
            if s.curvature < min.curvature {
                min = *s;
            }
            sum += s.curvature;
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / samples.len() as f64;

        tracing::debug!(
            samples = samples.len(),
            max = max.curvature,
            min = min.curvature,
            mean,
            "curvature extremes"
        );
        Ok(CurvatureExtremesReport { max, min, mean })
    }
}
