use crate::error::Result;
use crate::geometry::PlanarCurve;
use crate::math::{rotate_ccw, Vector2};

use super::jet::Jet;

/// Computes the unit tangent of a curve at a parameter.
pub struct Tangent {
    theta: f64,
}

impl Tangent {
    /// Creates a new `Tangent` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning `(dx, dy) / |(dx, dy)|`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector
    /// has zero length at `theta`.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Vector2> {
        Jet::at(curve, self.theta).unit_tangent()
    }
}

/// Computes the unit normal of a curve at a parameter.
///
/// The normal is the tangent rotated by +90 degrees: `(nx, ny) = (-ty, tx)`.
/// On a counter-clockwise closed curve it points to the left of the direction
/// of travel.
pub struct Normal {
    theta: f64,
}

impl Normal {
    /// Creates a new `Normal` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning the unit normal.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the tangent is undefined.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Vector2> {
        let tangent = Tangent::new(self.theta).execute(curve)?;
        Ok(rotate_ccw(&tangent))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, OsculateError};
    use crate::geometry::{Circle, PolarCurve};
    use crate::math::Point2;
    use crate::operations::query::test_curves::Cusp;
    use approx::assert_abs_diff_eq;

    #[test]
    fn blot_tangent_at_zero() {
        let c = PolarCurve::blot();
        let t = Tangent::new(0.0).execute(&c).unwrap();
        let len = 3.2825_f64.sqrt();
        assert_abs_diff_eq!(t.x, 1.15 / len, epsilon = 1e-12);
        assert_abs_diff_eq!(t.y, 1.4 / len, epsilon = 1e-12);
    }

    #[test]
    fn normal_is_tangent_rotated() {
        let c = PolarCurve::blot();
        for i in 0..40 {
            let theta = f64::from(i) * 0.157;
            let t = Tangent::new(theta).execute(&c).unwrap();
            let n = Normal::new(theta).execute(&c).unwrap();
            assert_eq!(n, Vector2::new(-t.y, t.x));
        }
    }

    #[test]
    fn tangent_and_normal_are_unit() {
        let c = PolarCurve::blot();
        for i in 0..200 {
            let theta = f64::from(i) * 0.0314;
            let t = Tangent::new(theta).execute(&c).unwrap();
            let n = Normal::new(theta).execute(&c).unwrap();
            assert_abs_diff_eq!(t.norm(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
            assert!(t.dot(&n).abs() < 1e-9);
        }
    }

    #[test]
    fn circle_normal_points_inward() {
        let c = Circle::new(Point2::new(2.0, -1.0), 3.0).unwrap();
        let theta = 1.1;
        let n = Normal::new(theta).execute(&c).unwrap();
        let inward = (*c.center() - c.evaluate(theta)).normalize();
        assert!((n - inward).norm() < 1e-12);
    }

    #[test]
    fn degenerate_tangent_fails_fast() {
        let err = Tangent::new(0.0).execute(&Cusp).unwrap_err();
        assert_eq!(
            err,
            OsculateError::Geometry(GeometryError::DegenerateTangent { theta: 0.0 })
        );
        assert!(Normal::new(0.0).execute(&Cusp).is_err());
        assert!(Tangent::new(0.5).execute(&Cusp).is_ok());
    }
}
