//! Scalar (1D) bounded minimization.
//!
//! This module provides Brent's method for minimizing a univariate function
//! `f: (f64) -> f64` on a closed interval `[x1, x2]`. The search combines
//! golden section steps with successive parabolic interpolation and never
//! evaluates outside the interval.
//!
//! Extra fixed parameters of the objective are supplied by closure capture:
//!
//! ```ignore
//! use fminbound::optimize::scalar::{minimize_scalar_bounded, BoundedOptions};
//!
//! let (target, weight) = (0.3, 2.0);
//! let result = minimize_scalar_bounded(
//!     |x| weight * (x - target).powi(2),
//!     (0.0, 1.0),
//!     &BoundedOptions::default(),
//! )?;
//! assert!(result.success());
//! ```

mod bounded;
mod observer;

pub use bounded::{
    fminbound, minimize_scalar_bounded, minimize_scalar_bounded_observed,
    minimize_scalar_bounded_tensor, try_minimize_scalar_bounded,
};
pub use observer::{
    BoundedObserver, EvaluationRecord, EvaluationRecorder, StepKind, TracingObserver,
};

/// How much diagnostic output a run produces.
///
/// Levels are cumulative: each one includes everything below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent = 0,
    /// Warn when the evaluation budget runs out.
    Warnings = 1,
    /// Also report successful convergence.
    Convergence = 2,
    /// Also trace every function evaluation.
    Iterations = 3,
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::Silent,
            1 => Self::Warnings,
            2 => Self::Convergence,
            _ => Self::Iterations,
        }
    }
}

/// Options for bounded scalar minimization.
#[derive(Debug, Clone)]
pub struct BoundedOptions {
    /// Convergence tolerance on the abscissa
    pub xtol: f64,
    /// Maximum number of function evaluations, the initial one included
    pub max_fun: usize,
    /// Diagnostic level used by [`minimize_scalar_bounded`]
    pub verbosity: Verbosity,
}

impl Default for BoundedOptions {
    fn default() -> Self {
        Self {
            xtol: 1e-5,
            max_fun: 500,
            verbosity: Verbosity::Silent,
        }
    }
}

impl BoundedOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the convergence tolerance.
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Sets the evaluation budget.
    pub fn with_max_fun(mut self, max_fun: usize) -> Self {
        self.max_fun = max_fun;
        self
    }

    /// Sets the diagnostic level.
    pub fn with_verbosity(mut self, verbosity: impl Into<Verbosity>) -> Self {
        self.verbosity = verbosity.into();
        self
    }
}

/// Why a bounded minimization stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationStatus {
    /// The bracket shrank below the requested tolerance.
    Converged,
    /// The evaluation budget was exhausted first.
    MaxEvaluationsExceeded,
}

impl TerminationStatus {
    /// Numeric status code: 0 when converged, 1 when the budget ran out.
    pub fn code(self) -> i32 {
        match self {
            Self::Converged => 0,
            Self::MaxEvaluationsExceeded => 1,
        }
    }

    /// Human-readable description of the status.
    pub fn message(self) -> &'static str {
        match self {
            Self::Converged => "Solution found.",
            Self::MaxEvaluationsExceeded => "Maximum number of function calls reached.",
        }
    }
}

/// Result from a bounded minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedMinimizeResult {
    /// The minimum point found
    pub x: f64,
    /// Function value at minimum
    pub f_min: f64,
    /// Number of function evaluations performed
    pub nfev: usize,
    /// Number of iterations of the main loop
    pub iterations: usize,
    /// Final bracket width
    pub bracket_width: f64,
    /// Termination status
    pub status: TerminationStatus,
}

impl BoundedMinimizeResult {
    /// Whether the run converged within the evaluation budget.
    pub fn success(&self) -> bool {
        self.status == TerminationStatus::Converged
    }

    /// Numeric status code, see [`TerminationStatus::code`].
    pub fn status_code(&self) -> i32 {
        self.status.code()
    }

    /// Human-readable status message.
    pub fn message(&self) -> &'static str {
        self.status.message()
    }
}
