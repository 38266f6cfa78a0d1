//! Error types for optimization operations.

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that can occur during optimization.
///
/// Every variant is raised while validating arguments, before the objective
/// is evaluated. Running out of function evaluations is not an error; it is
/// reported through the result's termination status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    /// Invalid interval provided (reversed or non-finite bounds).
    #[error("Invalid interval [{a}, {b}] in {context}: {reason}")]
    InvalidInterval {
        a: f64,
        b: f64,
        reason: &'static str,
        context: String,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// Invalid input shape, e.g. a bound that is not a single scalar.
    #[error("Invalid input in {context}")]
    InvalidInput { context: String },

    /// Error from underlying numr operation.
    #[error("numr error: {0}")]
    NumrError(String),
}

impl From<numr::error::Error> for OptimizeError {
    fn from(err: numr::error::Error) -> Self {
        Self::NumrError(err.to_string())
    }
}
