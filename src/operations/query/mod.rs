//! Pointwise differential-geometry queries on a [`PlanarCurve`](crate::geometry::PlanarCurve).
//!
//! Each query is a small value holding its parameters, evaluated against a curve
//! with `execute`. Queries that need a unit tangent fail with
//! `GeometryError::DegenerateTangent` where the derivative vector vanishes.
//! Zero curvature is not an error; it is reported through [`Radius::Infinite`]
//! and [`Center::AtInfinity`].

mod curvature;
mod curvature_center;
mod curvature_extremes;
mod jet;
mod orthogonality;
mod point_data;
mod tangent_normal;

pub use curvature::{Curvature, Radius, RadiusOfCurvature, SignedCurvature};
pub use curvature_center::{Center, CurvatureCenter, EvolutePoint, OsculatingCircle};
pub use curvature_extremes::{
    CurvatureExtremes, CurvatureExtremesReport, CurvatureProfile, CurvatureSample,
};
pub use orthogonality::Orthogonality;
pub use point_data::{MultiplePointsData, PointData, PointRecord};
pub use tangent_normal::{Normal, Tangent};
