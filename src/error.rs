use thiserror::Error;

/// Top-level error type for the osculate crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OsculateError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// Errors related to differential-geometry evaluation at a single parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("derivative vector vanishes at theta = {theta}; tangent is undefined")]
    DegenerateTangent { theta: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to sampling the curve over its domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    #[error("sample count must be positive")]
    EmptySample,

    #[error("none of the {requested} sampled angles produced a valid value")]
    NoValidSamples { requested: usize },
}

/// Errors related to the interactive view state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("scale factor must be greater than 1, got {0}")]
    InvalidScaleFactor(f64),

    #[error("invalid view bounds: {0}")]
    InvalidBounds(String),
}

/// Convenience type alias for results using [`OsculateError`].
pub type Result<T> = std::result::Result<T, OsculateError>;
