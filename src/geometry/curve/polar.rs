use crate::math::{Point2, Vector2};

use super::{CurveDomain, PlanarCurve, RadiusProfile};

/// A closed curve given in polar form by a [`RadiusProfile`].
///
/// `P(theta) = r(theta) * (cos(theta), sin(theta))`, with `theta` in `[0, 2*pi]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarCurve {
    profile: RadiusProfile,
}

impl PolarCurve {
    /// Creates a polar curve from a radius profile.
    #[must_use]
    pub fn new(profile: RadiusProfile) -> Self {
        Self { profile }
    }

    /// The blot curve, see [`RadiusProfile::blot`].
    #[must_use]
    pub fn blot() -> Self {
        Self::new(RadiusProfile::blot())
    }

    /// Returns the radius profile.
    #[must_use]
    pub fn profile(&self) -> &RadiusProfile {
        &self.profile
    }

    /// Maps `theta` to Cartesian coordinates: `x = r cos(theta)`, `y = r sin(theta)`.
    #[must_use]
    pub fn cartesian(&self, theta: f64) -> Point2 {
        let r = self.profile.radius(theta);
        let (sin, cos) = theta.sin_cos();
        Point2::new(r * cos, r * sin)
    }

    /// Element-wise [`cartesian`](Self::cartesian), preserving order and length.
    #[must_use]
    pub fn cartesian_many(&self, thetas: &[f64]) -> Vec<Point2> {
        thetas.iter().map(|&t| self.cartesian(t)).collect()
    }
}

impl PlanarCurve for PolarCurve {
    fn evaluate(&self, t: f64) -> Point2 {
        self.cartesian(t)
    }

    fn first_derivative(&self, t: f64) -> Vector2 {
        let r = self.profile.radius(t);
        let dr = self.profile.radius_derivative(t);
        let (sin, cos) = t.sin_cos();
        Vector2::new(dr * cos - r * sin, dr * sin + r * cos)
    }

    fn second_derivative(&self, t: f64) -> Vector2 {
        let r = self.profile.radius(t);
        let dr = self.profile.radius_derivative(t);
        let d2r = self.profile.radius_second_derivative(t);
        let (sin, cos) = t.sin_cos();
        Vector2::new(
            d2r * cos - 2.0 * dr * sin - r * cos,
            d2r * sin + 2.0 * dr * cos - r * sin,
        )
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::full_turn()
    }

    fn is_closed(&self) -> bool {
        true
    }
}
