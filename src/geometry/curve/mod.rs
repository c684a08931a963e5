mod circle;
mod ellipse;
mod polar;
mod radius;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use polar::PolarCurve;
pub use radius::{Harmonic, RadiusProfile, Wave};

use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The full-turn domain `[0, 2*pi]`.
    #[must_use]
    pub fn full_turn() -> Self {
        Self::new(0.0, std::f64::consts::TAU)
    }

    /// Returns the length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }
}

/// Trait for twice-differentiable parametric curves in the plane.
///
/// All derivatives are taken with respect to the curve parameter `t` and must
/// be exact (closed form), not finite-difference approximations. Every method
/// is a pure function of `t`.
pub trait PlanarCurve: Send + Sync {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns `(dx/dt, dy/dt)` at parameter `t`.
    fn first_derivative(&self, t: f64) -> Vector2;

    /// Returns `(d2x/dt2, d2y/dt2)` at parameter `t`.
    fn second_derivative(&self, t: f64) -> Vector2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
