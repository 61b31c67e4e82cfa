use thiserror::Error;

use crate::math::quadratic::quadraticerror::QuadraticError;

/// Failures of the outer shell: reading configuration or request files, and
/// the pipeline errors raised while running a request.
#[derive(Debug, Error)]
pub enum QuadPlotError {
    #[error("cannot read file: {0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error(transparent)]
    QuadraticError(#[from] QuadraticError)
}
