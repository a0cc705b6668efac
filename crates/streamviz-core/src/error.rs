//! Error types for streamviz.

use thiserror::Error;

/// The main error type for streamviz operations.
#[derive(Error, Debug)]
pub enum StreamvizError {
    /// The input volume does not hold a 3-component vector field.
    #[error("input volume is not a vector field: veclen is {veclen}, expected 3")]
    NotVectorField { veclen: usize },

    /// The input volume's grid kind has no streamline interpolator.
    #[error("grid kind '{0}' is not supported by the streamline tracer")]
    UnsupportedGridKind(&'static str),

    /// The volume resolution cannot form hexahedral cells.
    #[error("resolution ({x}, {y}, {z}) is degenerate: each axis needs at least 2 nodes")]
    DegenerateResolution { x: u32, y: u32, z: u32 },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// A rectilinear coordinate axis is not monotonically increasing.
    #[error("coordinate array for axis '{0}' is not monotonically increasing")]
    NonMonotonicAxis(char),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for streamviz operations.
pub type Result<T> = std::result::Result<T, StreamvizError>;
