use crate::error::Result;
use crate::geometry::PlanarCurve;

use super::{Polyline, TessellationParams};

/// Tessellates a curve into a polyline over its whole domain.
pub struct TessellateCurve {
    params: TessellationParams,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// For a closed curve the last vertex repeats the first.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EmptySample` if fewer than two samples are requested.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Polyline> {
        let mut polyline = Polyline::default();
        for t in self.params.parameters(curve.domain())? {
            polyline.push(t, curve.evaluate(t));
        }
        Ok(polyline)
    }
}
