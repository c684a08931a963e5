use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurveDomain, PlanarCurve};

/// A full ellipse in the plane.
///
/// `P(t) = center + a * cos(t) * major_dir + b * sin(t) * minor_dir`,
/// where `minor_dir` is `major_dir` rotated by +90 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    semi_major: f64,
    semi_minor: f64,
    major_dir: Vector2,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_major` - Length of the semi-axis along `major_dir` (must be positive)
    /// * `semi_minor` - Length of the perpendicular semi-axis (must be positive)
    /// * `major_dir` - Direction of the first axis (normalized internally)
    ///
    /// # Errors
    ///
    /// Returns an error if either axis length is non-positive or the major
    /// direction is zero-length.
    pub fn new(
        center: Point2,
        semi_major: f64,
        semi_minor: f64,
        major_dir: Vector2,
    ) -> Result<Self> {
        if semi_major < TOLERANCE {
            return Err(
                GeometryError::Degenerate("semi-major axis must be positive".into()).into(),
            );
        }
        if semi_minor < TOLERANCE {
            return Err(
                GeometryError::Degenerate("semi-minor axis must be positive".into()).into(),
            );
        }
        let len = major_dir.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            major_dir: major_dir / len,
        })
    }

    /// Creates an axis-aligned ellipse centered at the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either axis length is non-positive.
    pub fn axis_aligned(semi_major: f64, semi_minor: f64) -> Result<Self> {
        Self::new(Point2::origin(), semi_major, semi_minor, Vector2::x())
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    fn minor_dir(&self) -> Vector2 {
        Vector2::new(-self.major_dir.y, self.major_dir.x)
    }

    fn combine(&self, u: f64, v: f64) -> Vector2 {
        self.major_dir * (self.semi_major * u) + self.minor_dir() * (self.semi_minor * v)
    }
}

impl PlanarCurve for Ellipse {
    fn evaluate(&self, t: f64) -> Point2 {
        let (sin, cos) = t.sin_cos();
        self.center + self.combine(cos, sin)
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        let (sin, cos) = t.sin_cos();
        self.combine(-sin, cos)
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        let (sin, cos) = t.sin_cos();
        self.combine(-cos, -sin)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::full_turn()
    }

    fn is_closed(&self) -> bool {
        true
    }
}
