//! fminbound - Bounded derivative-free scalar minimization
//!
//! fminbound finds a local minimizer of a univariate function on a closed
//! interval with Brent's method: golden section search combined with
//! successive parabolic interpolation. No derivatives are required and the
//! objective is never evaluated outside the interval.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     fminbound                            │
//! │   (Brent bounded minimizer, observers, result record)   │
//! └──────────────────────────┬──────────────────────────────┘
//!                            │ uses
//! ┌──────────────────────────▼──────────────────────────────┐
//! │                       numr                               │
//! │        (tensors, used for array-scalar bounds)          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`optimize`] - Bounded scalar minimization and its error types
//!
//! # Diagnostics
//!
//! The library never prints. Progress and termination messages are emitted
//! as `tracing` events under the `fminbound::bounded` target when
//! [`Verbosity`] asks for them; install a subscriber in the application to
//! see them. Custom reporting goes through [`BoundedObserver`].
//!
//! # Example
//!
//! ```ignore
//! use fminbound::{minimize_scalar_bounded, BoundedOptions};
//!
//! let result = minimize_scalar_bounded(|x| x * x, (-2.0, 1.0), &BoundedOptions::default())?;
//! assert!(result.success());
//! assert!(result.x.abs() < 1e-5);
//! ```

pub mod optimize;

// Re-export main types for convenience
pub use optimize::{OptimizeError, OptimizeResult, scalar::*};
