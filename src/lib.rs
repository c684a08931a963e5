//! Differential geometry of closed planar curves given in polar form.
//!
//! The default curve is the "blot"
//! `r(theta) = 1 + 0.3cos(2theta) + 0.2sin(3theta) + 0.1cos(7theta) + 0.05sin(11theta)`.
//! Tangents, normals, curvature, osculating circles and the evolute are computed
//! from closed-form derivatives.
//!
//! ```
//! use osculate::geometry::PolarCurve;
//! use osculate::operations::query::{Curvature, PointData};
//!
//! let blot = PolarCurve::blot();
//! let k = Curvature::new(0.0).execute(&blot)?;
//! let record = PointData::new(0.0).execute(&blot)?;
//! assert_eq!(record.curvature, k);
//! # Ok::<(), osculate::OsculateError>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod sampling;
pub mod tessellation;
pub mod view;

pub use config::AnalysisConfig;
pub use error::{OsculateError, Result};
