//! Optimization algorithms for fminbound.
//!
//! # Modules
//!
//! - [`scalar`] - Univariate (1D) bounded minimization
//!
//! # Quick Start
//!
//! ```ignore
//! use fminbound::optimize::scalar::{minimize_scalar_bounded, BoundedOptions};
//!
//! // Minimize f(x) = (x - 2)^2 on [0, 4]
//! let result = minimize_scalar_bounded(|x| (x - 2.0).powi(2), (0.0, 4.0), &BoundedOptions::default())?;
//! assert!((result.x - 2.0).abs() < 1e-5);
//! ```
//!
//! ## Fallible objectives
//!
//! ```ignore
//! use fminbound::optimize::scalar::{try_minimize_scalar_bounded, BoundedOptions};
//!
//! // The first Err returned by the objective ends the run unchanged.
//! let result = try_minimize_scalar_bounded(|x| model.residual(x), (0.0, 1.0), &BoundedOptions::default(), ())?;
//! ```
//!
//! ## Observing progress
//!
//! ```ignore
//! use fminbound::optimize::scalar::{minimize_scalar_bounded_observed, BoundedOptions, EvaluationRecorder};
//!
//! let mut recorder = EvaluationRecorder::new();
//! let result = minimize_scalar_bounded_observed(f, (0.0, 1.0), &BoundedOptions::default(), &mut recorder)?;
//! assert_eq!(recorder.records.len(), result.nfev);
//! ```

pub mod error;
pub mod scalar;
pub(crate) mod utils;

pub use error::{OptimizeError, OptimizeResult};
pub use scalar::{
    BoundedMinimizeResult, BoundedObserver, BoundedOptions, TerminationStatus, Verbosity,
    fminbound, minimize_scalar_bounded, minimize_scalar_bounded_observed,
    minimize_scalar_bounded_tensor, try_minimize_scalar_bounded,
};
