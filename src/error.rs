use std::fmt;

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, ElmError>;

/// Errors produced by the model when inputs or state are invalid.
#[derive(Debug)]
pub enum ElmError {
    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// A shape invariant was violated (e.g. mismatched dimensions).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "features", "samples").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// Prediction was requested before the output layer was solved.
    NotFitted,

    /// The pseudo-inverse decomposition did not converge.
    NumericalFailure(&'static str),
}

impl fmt::Display for ElmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElmError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            ElmError::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            ElmError::NotFitted => {
                write!(f, "the output layer has not been solved yet")
            }
            ElmError::NumericalFailure(msg) => write!(f, "numerical failure: {msg}"),
        }
    }
}

impl std::error::Error for ElmError {}
