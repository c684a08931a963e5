use crate::error::{OsculateError, Result};
use crate::geometry::PlanarCurve;
use crate::operations::query::{Center, EvolutePoint};

use super::{Polyline, TessellationParams};

/// Tessellates the evolute of a curve.
///
/// The evolute escapes to infinity at inflection points, so the result is a
/// list of runs, split wherever the curvature center is not finite. Runs
/// keep the parameter order of the source curve.
pub struct TessellateEvolute {
    params: TessellationParams,
}

impl TessellateEvolute {
    /// Creates a new `TessellateEvolute` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns `SamplingError::EmptySample` if fewer than two samples are requested.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<Vec<Polyline>> {
        let mut runs = Vec::new();
        let mut current = Polyline::default();
        for t in self.params.parameters(curve.domain())? {
            match EvolutePoint::new(t).execute(curve) {
                Ok(Center::Finite(p)) => current.push(t, p),
                Ok(Center::AtInfinity) | Err(OsculateError::Geometry(_)) => {
                    tracing::debug!(theta = t, "evolute break");
                    if !current.is_empty() {
                        runs.push(std::mem::take(&mut current));
                    }
                }
                Err(err) => return Err(err),
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        Ok(runs)
    }
}
