use crate::error::Result;
use crate::geometry::PlanarCurve;

use super::tangent_normal::{Normal, Tangent};

/// Diagnostic: dot product of the unit tangent and unit normal.
///
/// A healthy evaluation returns a value indistinguishable from zero.
pub struct Orthogonality {
    theta: f64,
}

impl Orthogonality {
    /// Creates a new `Orthogonality` query.
    #[must_use]
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Executes the query, returning `tangent . normal`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateTangent` if the tangent is undefined.
    pub fn execute<C: PlanarCurve + ?Sized>(&self, curve: &C) -> Result<f64> {
        let tangent = Tangent::new(self.theta).execute(curve)?;
        let normal = Normal::new(self.theta).execute(curve)?;
        Ok(tangent.dot(&normal))
    }
}
