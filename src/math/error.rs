// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient points for operation: expected at least {expected}, got {actual}")]
    InsufficientPoints { expected: usize, actual: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Invalid polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("Triangulation index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type MathResult<T> = Result<T, MathError>;
