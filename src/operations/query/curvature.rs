use crate::error::Result;
use crate::geometry::PlanarCurve;
use crate::math::CURVATURE_EPSILON;

use super::jet::Jet;

/// Radius of curvature, with an explicit variant for inflection points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Radius {
    /// `1 / curvature`, always positive.
    Finite(f64),
    /// Curvature is at or below [`CURVATURE_EPSILON`].
    Infinite,
}

impl Radius {
    /// Builds the radius for an unsigned curvature value.
    ///
    /// Curvature must exceed [`CURVATURE_EPSILON`] for the radius to be finite.
    #[must_use]
    pub fn from_curvature(curvature: f64) -> Self {
        if is_inflection(curvature) {
            Self::Infinite
        } else {
            Self::Finite(1.0 / curvature.abs())
        }
    }

    /// Returns the finite radius, if any.
    #[must_use]
    pub fn finite(self) -> Option<f64> {
        match self {
            Self::Finite(r) => Some(r),
            Self::Infinite => None,
        }
    }

    /// Returns whether the radius is infinite.
    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the radius as a float, mapping [`Radius::Infinite`] to `f64::INFINITY`.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.finite().unwrap_or(f64::INFINITY)
    }
}

/// Singular-point predicate shared by radius and curvature-center queries.
pub(crate) fn is_inflection(curvature: f64) -> bool {
    curvature.abs() <= CURVATURE_EPSILON
}

/// Computes the unsigned curvature `|x'y'' - y'x''| / (x'^2 + y'^2)^1.5`.
pub struct Curvature {
    theta: f64,
}

impl Curvature {
    /// Creates a new `Curvature` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning a non-negative curvature.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<f64> {
        Ok(SignedCurvature::new(self.theta).execute(curve)?.abs())
    }
}

/// Computes the signed curvature `(x'y'' - y'x'') / (x'^2 + y'^2)^1.5`.
///
/// Positive when the curve turns left (counter-clockwise).
pub struct SignedCurvature {
    theta: f64,
}

impl SignedCurvature {
    /// Creates a new `SignedCurvature` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<f64> {
        Jet::at(curve, self.theta).signed_curvature()
    }
}

/// Computes the radius of curvature.
pub struct RadiusOfCurvature {
    theta: f64,
}

impl RadiusOfCurvature {
    /// Creates a new `RadiusOfCurvature` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning [`Radius::Infinite`] at inflection points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Radius> {
        let curvature = Curvature::new(self.theta).execute(curve)?;
        Ok(Radius::from_curvature(curvature))
    }
}
