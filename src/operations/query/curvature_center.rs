use crate::error::Result;
use crate::geometry::{Circle, PlanarCurve};
use crate::math::{Point2, Vector2};

use super::curvature::{is_inflection, Radius};
use super::jet::Jet;

/// Center of curvature, with an explicit variant for inflection points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Center {
    /// The osculating-circle center.
    Finite(Point2),
    /// The curve has zero curvature here; the center lies at infinity.
    AtInfinity,
}

impl Center {
    /// Returns the finite center, if any.
    #[must_use]
    pub fn finite(self) -> Option<Point2> {
        match self {
            Self::Finite(p) => Some(p),
            Self::AtInfinity => None,
        }
    }

    /// Returns whether the center lies at infinity.
    #[must_use]
    pub fn is_at_infinity(self) -> bool {
        matches!(self, Self::AtInfinity)
    }
}

/// `(xc, yc) = (x - y' f, y + x' f)` with `f = (x'^2 + y'^2) / (x'y'' - y'x'')`.
///
/// Uses the same inflection predicate as the radius of curvature, so a center
/// is finite exactly when the radius is.
pub(crate) fn center_of(jet: &Jet) -> Result<Center> {
    Ok(center_with_curvature(jet, jet.signed_curvature()?))
}

fn center_with_curvature(jet: &Jet, curvature: f64) -> Center {
    if is_inflection(curvature) {
        return Center::AtInfinity;
    }
    let factor = jet.d1.norm_squared() / jet.cross();
    Center::Finite(jet.point + Vector2::new(-jet.d1.y, jet.d1.x) * factor)
}

/// Computes the center of curvature (osculating-circle center).
pub struct CurvatureCenter {
    theta: f64,
}

impl CurvatureCenter {
    /// Creates a new `CurvatureCenter` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning [`Center::AtInfinity`] at inflection points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Center> {
        center_of(&Jet::at(curve, self.theta))
    }
}

/// Evaluates the evolute of a curve at a parameter.
///
/// The evolute is the locus of curvature centers, so this is the same
/// computation as [`CurvatureCenter`].
pub struct EvolutePoint {
    theta: f64,
}

impl EvolutePoint {
    /// Creates a new `EvolutePoint` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Center> {
        center_of(&Jet::at(curve, self.theta))
    }
}

/// Computes the osculating circle at a parameter.
///
/// Yields `None` at inflection points, and also when the radius reaches
/// the optional `max_radius` cap (circles too large to be useful on screen).
pub struct OsculatingCircle {
    theta: f64,
    max_radius: Option<f64>,
}

impl OsculatingCircle {
    /// Creates a new `OsculatingCircle` query with no radius cap.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self {
            theta,
            max_radius: None,
        }
    }

    /// Discards circles whose radius is not strictly below `max_radius`.
    #[must_use]
    pub fn with_max_radius(mut self, max_radius: f64) -> Self {
        self.max_radius = Some(max_radius);
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes,
    /// or `GeometryError::Degenerate` if the radius is too small to form a circle.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Option<Circle>> {
        let jet = Jet::at(curve, self.theta);
        let curvature = jet.signed_curvature()?;
        let (Center::Finite(center), Radius::Finite(radius)) = (
            center_with_curvature(&jet, curvature),
            Radius::from_curvature(curvature),
        ) else {
            return Ok(None);
        };
        if self.max_radius.is_some_and(|max| radius >= max) {
            return Ok(None);
        }
        Ok(Some(Circle::new(center, radius)?))
    }
}
