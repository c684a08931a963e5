use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurveDomain, PlanarCurve};

/// A full circle in the plane.
///
/// `P(t) = center + radius * (cos(t), sin(t))`, counter-clockwise over `[0, 2*pi]`.
/// Also the value type of an osculating circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive and finite".into())
                    .into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns whether `p` lies on the circle within `tolerance`.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tolerance: f64) -> bool {
        ((*p - self.center).norm() - self.radius).abs() <= tolerance
    }
}

impl PlanarCurve for Circle {
    fn evaluate(&self, t: f64) -> Point2 {
        let (sin, cos) = t.sin_cos();
        self.center + Vector2::new(cos, sin) * self.radius
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        let (sin, cos) = t.sin_cos();
        Vector2::new(-sin, cos) * self.radius
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        let (sin, cos) = t.sin_cos();
        Vector2::new(-cos, -sin) * self.radius
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::full_turn()
    }

    fn is_closed(&self) -> bool {
        true
    }
}
