use crate::math::Point2;
use crate::operations::query::{OsculatingCircle, PointRecord};
use crate::sampling::random_angles;
use crate::tessellation::TessellationParams;

/// Settings for analysing and presenting a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Number of samples used to draw the curve and its evolute.
    pub curve_points: usize,
    /// Number of randomly selected points to annotate.
    pub random_points: usize,
    /// Seed for the random point selection.
    pub seed: u64,
    /// Length of tangent and normal arrows.
    pub vector_scale: f64,
    /// Osculating circles at or above this radius are not drawn.
    pub max_circle_radius: f64,
    /// Number of samples for the curvature extremes search.
    pub extremes_samples: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            curve_points: 1000,
            random_points: 10,
            seed: 42,
            vector_scale: 0.25,
            max_circle_radius: 2.0,
            extremes_samples: 1000,
        }
    }
}

impl AnalysisConfig {
    /// Tessellation parameters for drawing the curve.
    #[must_use]
    pub fn tessellation(&self) -> TessellationParams {
        TessellationParams {
            samples: self.curve_points,
        }
    }

    /// The seeded, sorted angles of the points to annotate.
    #[must_use]
    pub fn selected_angles(&self) -> Vec<f64> {
        random_angles(self.random_points, self.seed)
    }

    /// Tangent and normal arrow segments for a point, `vector_scale` long.
    #[must_use]
    pub fn arrows(&self, record: &PointRecord) -> [(Point2, Point2); 2] {
        [
            record.tangent_arrow(self.vector_scale),
            record.normal_arrow(self.vector_scale),
        ]
    }

    /// Osculating-circle query at `theta`, capped at `max_circle_radius`.
    #[must_use]
    pub fn osculating_circle(&self, theta: f64) -> OsculatingCircle {
        OsculatingCircle::new(theta).with_max_radius(self.max_circle_radius)
    }
}
