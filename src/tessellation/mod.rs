mod tessellate_curve;
mod tessellate_evolute;

pub use tessellate_curve::TessellateCurve;
pub use tessellate_evolute::TessellateEvolute;

use crate::error::{Result, SamplingError};
use crate::geometry::CurveDomain;
use crate::math::Point2;
use crate::sampling::linspace;

/// Parameters controlling tessellation density.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Number of parameter samples across the curve domain, both ends included.
    pub samples: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { samples: 1000 }
    }
}

impl TessellationParams {
    /// Returns the sample parameters across `domain`, endpoints included.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EmptySample` if fewer than two samples are requested.
    pub(crate) fn parameters(&self, domain: CurveDomain) -> Result<Vec<f64>> {
        if self.samples < 2 {
            return Err(SamplingError::EmptySample.into());
        }
        Ok(linspace(domain.t_min, domain.t_max, self.samples))
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// Parameter value of each vertex.
    pub parameters: Vec<f64>,
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}

impl Polyline {
    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, t: f64, p: Point2) {
        self.parameters.push(t);
        self.points.push(p);
    }
}
