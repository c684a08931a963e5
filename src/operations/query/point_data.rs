use crate::error::Result;
use crate::geometry::PlanarCurve;
use crate::math::{rotate_ccw, Point2, Vector2};

use super::curvature::Radius;
use super::curvature_center::{center_of, Center};
use super::jet::Jet;

/// Everything known about the curve at one parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    /// Curve parameter.
    pub theta: f64,
    /// Position on the curve.
    pub point: Point2,
    /// Unit tangent.
    pub tangent: Vector2,
    /// Unit normal, the tangent rotated by +90 degrees.
    pub normal: Vector2,
    /// Unsigned curvature.
    pub curvature: f64,
    /// Radius of curvature, infinite at inflection points.
    pub radius_of_curvature: Radius,
    /// Osculating-circle center, at infinity at inflection points.
    pub curvature_center: Center,
}

impl PointRecord {
    /// Segment from the point along the tangent, scaled by `scale`.
    #[must_use]
    pub fn tangent_arrow(&self, scale: f64) -> (Point2, Point2) {
        (self.point, self.point + self.tangent * scale)
    }

    /// Segment from the point along the normal, scaled by `scale`.
    #[must_use]
    pub fn normal_arrow(&self, scale: f64) -> (Point2, Point2) {
        (self.point, self.point + self.normal * scale)
    }
}

/// Gathers a [`PointRecord`] for one parameter value.
pub struct PointData {
    theta: f64,
}

impl PointData {
    /// Creates a new `PointData` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the derivative vector vanishes.
    /// Inflection points are not errors: they yield [`Radius::Infinite`] and
    /// [`Center::AtInfinity`].
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<PointRecord> {
        let jet = Jet::at(curve, self.theta);
        let tangent = jet.unit_tangent()?;
        let curvature = jet.signed_curvature()?.abs();
        Ok(PointRecord {
            theta: self.theta,
            point: jet.point,
            tangent,
            normal: rotate_ccw(&tangent),
            curvature,
            radius_of_curvature: Radius::from_curvature(curvature),
            curvature_center: center_of(&jet)?,
        })
    }
}

/// Gathers [`PointRecord`]s for a sequence of parameter values.
pub struct MultiplePointsData<'a> {
    thetas: &'a [f64],
}

impl<'a> MultiplePointsData<'a> {
    /// Creates a new `MultiplePointsData` query.
    #[must_use]
    pub fn new(thetas: &'a [f64]) -> Self {
        Self { thetas }
    }

    /// Executes the query.
    ///
    /// The output has one entry per input angle, in input order. A degenerate
    /// angle produces an `Err` entry without affecting its neighbours.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Vec<Result<PointRecord>> {
        let records: Vec<_> = self
            .thetas
            .iter()
            .map(|&theta| PointData::new(theta).execute(curve))
            .collect();
        let failed = records.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            tracing::warn!(failed, total = records.len(), "degenerate angles in batch");
        }
        tracing::debug!(total = records.len(), "collected point data");
        records
    }
}
