pub mod curve;

pub use curve::{
    Circle, CurveDomain, Ellipse, Harmonic, PlanarCurve, PolarCurve, RadiusProfile, Wave,
};
