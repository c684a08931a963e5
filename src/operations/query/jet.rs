use crate::error::{GeometryError, Result};
use crate::geometry::PlanarCurve;
use crate::math::{cross_2d, Point2, Vector2, TOLERANCE};

/// Position and first two derivatives of a curve at one parameter value.
///
/// Every curvature-related query starts from a `Jet`, so all of them see the
/// same derivative values and agree on which parameters are degenerate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Jet {
    pub theta: f64,
    pub point: Point2,
    pub d1: Vector2,
    pub d2: Vector2,
}

impl Jet {
    pub fn at<C: PlanarCurve + ?Sized>(curve: &C, theta: f64) -> Self {
        Self {
            theta,
            point: curve.evaluate(theta),
            d1: curve.first_derivative(theta),
            d2: curve.second_derivative(theta),
        }
    }

    /// Returns `|d1|`, failing when the derivative vector vanishes.
    pub fn speed(&self) -> Result<f64> {
        let speed = self.d1.norm();
        if speed < TOLERANCE {
            return Err(GeometryError::DegenerateTangent { theta: self.theta }.into());
        }
        Ok(speed)
    }

    /// `x'y'' - y'x''`.
    pub fn cross(&self) -> f64 {
        cross_2d(&self.d1, &self.d2)
    }

    pub fn unit_tangent(&self) -> Result<Vector2> {
        let speed = self.speed()?;
        Ok(self.d1 / speed)
    }

    pub fn signed_curvature(&self) -> Result<f64> {
        let speed = self.speed()?;
        Ok(self.cross() / speed.powi(3))
    }
}
