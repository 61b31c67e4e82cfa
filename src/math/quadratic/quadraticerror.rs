use thiserror::Error;

// ─────────────────────────────────────────────────────────────────────────────
// QuadraticError
// ─────────────────────────────────────────────────────────────────────────────

/// Every failure the analysis pipeline can report. All of them are raised
/// while validating inputs, before any analysis or sampling takes place.
///
/// Each variant carries the offending field and value so that callers can
/// surface the message as-is (e.g. "a cannot be zero").
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadraticError {
    #[error("{field} cannot be zero (got {value}): the function is linear or constant, not a parabola")]
    DegenerateInputError {
        field: &'static str,
        value: f64
    },

    #[error("invalid range [{min}, {max}]: min must be less than max, with a finite width wide enough to hold the requested samples")]
    InvalidRangeError {
        min: f64,
        max: f64
    },

    #[error("{field} must be a finite number (got {value})")]
    NonFiniteInputError {
        field: &'static str,
        value: f64
    },

    #[error("sample count must be at least 2 (got {count})")]
    InvalidSampleCountError {
        count: usize
    },

    #[error("an overlay needs at least one coefficient value")]
    EmptyOverlayError,

    #[error("overlay variant {index} is invalid: {source}")]
    VariantError {
        index: usize,
        #[source]
        source: Box<QuadraticError>
    }
}

impl QuadraticError {
    /// Wraps the error with the index of the overlay variant that raised it.
    pub fn in_variant(self, index: usize) -> QuadraticError {
        QuadraticError::VariantError {
            index,
            source: Box::new(self)
        }
    }

    /// Name of the offending input, when the error is tied to a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            QuadraticError::DegenerateInputError { field, .. } => Some(*field),
            QuadraticError::NonFiniteInputError { field, .. } => Some(*field),
            QuadraticError::InvalidRangeError { .. } => Some("range"),
            QuadraticError::InvalidSampleCountError { .. } => Some("samples"),
            QuadraticError::EmptyOverlayError => Some("values"),
            QuadraticError::VariantError { source, .. } => source.field()
        }
    }
}
