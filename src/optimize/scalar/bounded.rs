//! Bounded scalar minimization using Brent's method.
//!
//! Each iteration either jumps to the vertex of a parabola fitted through the
//! three best points retained so far, or takes a golden section step into the
//! larger part of the bracket when the parabola is unreliable. Every trial
//! point is at least `tol1` away from the current best point and strictly
//! inside `[x1, x2]`.
//!
//! # References
//!
//! - Brent, R. P. (1973). "Algorithms for Minimization without Derivatives."
//!   Prentice-Hall. Chapter 5.
//! - Forsythe, Malcolm & Moler (1977). "Computer Methods for Mathematical
//!   Computations." `fmin`.

use numr::runtime::Runtime;
use numr::tensor::Tensor;

use super::observer::{BoundedObserver, EvaluationRecord, StepKind, TracingObserver};
use super::{BoundedMinimizeResult, BoundedOptions, TerminationStatus};
use crate::optimize::error::{OptimizeError, OptimizeResult};
use crate::optimize::utils::{GOLDEN_MEAN, SQRT_EPS, scalar_from_tensor, sign_or_one};

/// Working state of one minimization run.
///
/// `xf` is the best point so far, `nfc` the second best and `fulc` the
/// oldest retained point; each is paired with its function value.
struct BrentState {
    a: f64,
    b: f64,
    xf: f64,
    fx: f64,
    nfc: f64,
    fnfc: f64,
    fulc: f64,
    ffulc: f64,
    /// Step taken two iterations ago
    e: f64,
    /// Most recent step
    rat: f64,
    xm: f64,
    tol1: f64,
    tol2: f64,
    xtol: f64,
}

impl BrentState {
    fn new(a: f64, b: f64, xtol: f64, x0: f64, f0: f64) -> Self {
        let mut state = Self {
            a,
            b,
            xf: x0,
            fx: f0,
            nfc: x0,
            fnfc: f0,
            fulc: x0,
            ffulc: f0,
            e: 0.0,
            rat: 0.0,
            xm: 0.0,
            tol1: 0.0,
            tol2: 0.0,
            xtol,
        };
        state.refresh_tolerances();
        state
    }

    fn refresh_tolerances(&mut self) {
        self.xm = 0.5 * (self.a + self.b);
        self.tol1 = SQRT_EPS * self.xf.abs() + self.xtol / 3.0;
        self.tol2 = 2.0 * self.tol1;
    }

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn is_converged(&self) -> bool {
        !((self.xf - self.xm).abs() > self.tol2 - 0.5 * (self.b - self.a))
    }

    /// Chooses the next step and stores it in `rat`.
    ///
    /// The tolerances used here are those of the previous bracket update.
    fn next_step(&mut self) -> StepKind {
        if self.e.abs() > self.tol1 {
            let mut r = (self.xf - self.nfc) * (self.fx - self.ffulc);
            let mut q = (self.xf - self.fulc) * (self.fx - self.fnfc);
            let mut p = (self.xf - self.fulc) * q - (self.xf - self.nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = self.e;
            self.e = self.rat;

            // Vertex must be inside the bracket and the step at most half
            // of the step before last.
            if p.abs() < (0.5 * q * r).abs()
                && p > q * (self.a - self.xf)
                && p < q * (self.b - self.xf)
            {
                self.rat = p / q;
                let x = self.xf + self.rat;
                if (x - self.a) < self.tol2 || (self.b - x) < self.tol2 {
                    self.rat = self.tol1 * sign_or_one(self.xm - self.xf);
                }
                return StepKind::Parabolic;
            }
        }

        self.e = if self.xf >= self.xm {
            self.a - self.xf
        } else {
            self.b - self.xf
        };
        self.rat = GOLDEN_MEAN * self.e;
        StepKind::Golden
    }

    /// Point to evaluate next; never closer than `tol1` to `xf`.
    fn trial_point(&self) -> f64 {
        self.xf + sign_or_one(self.rat) * self.rat.abs().max(self.tol1)
    }

    /// Shrinks the bracket around the evaluated point and updates the
    /// three retained points.
    fn update(&mut self, x: f64, fu: f64) {
        if fu <= self.fx {
            if x >= self.xf {
                self.a = self.xf;
            } else {
                self.b = self.xf;
            }
            self.fulc = self.nfc;
            self.ffulc = self.fnfc;
            self.nfc = self.xf;
            self.fnfc = self.fx;
            self.xf = x;
            self.fx = fu;
        } else {
            if x < self.xf {
                self.a = x;
            } else {
                self.b = x;
            }
            if fu <= self.fnfc || self.nfc == self.xf {
                self.fulc = self.nfc;
                self.ffulc = self.fnfc;
                self.nfc = x;
                self.fnfc = fu;
            } else if fu <= self.ffulc || self.fulc == self.xf || self.fulc == self.nfc {
                self.fulc = x;
                self.ffulc = fu;
            }
        }

        self.refresh_tolerances();
    }

    fn record(&self, nfev: usize, x: f64, fx: f64, step: StepKind) -> EvaluationRecord {
        EvaluationRecord {
            nfev,
            x,
            fx,
            step,
            best_x: self.xf,
            best_f: self.fx,
            lower: self.a,
            upper: self.b,
        }
    }
}

fn validate(x1: f64, x2: f64, options: &BoundedOptions, context: &str) -> OptimizeResult<()> {
    if !x1.is_finite() || !x2.is_finite() {
        return Err(OptimizeError::InvalidInterval {
            a: x1,
            b: x2,
            reason: "bounds must be finite",
            context: context.to_string(),
        });
    }
    if x1 > x2 {
        return Err(OptimizeError::InvalidInterval {
            a: x1,
            b: x2,
            reason: "lower bound exceeds upper bound",
            context: context.to_string(),
        });
    }
    if !(x2 - x1).is_finite() {
        return Err(OptimizeError::InvalidInterval {
            a: x1,
            b: x2,
            reason: "interval width is not finite",
            context: context.to_string(),
        });
    }
    if !(options.xtol.is_finite() && options.xtol > 0.0) {
        return Err(OptimizeError::InvalidParameter {
            parameter: "xtol".to_string(),
            message: format!("must be finite and positive, got {}", options.xtol),
        });
    }
    if options.max_fun == 0 {
        return Err(OptimizeError::InvalidParameter {
            parameter: "max_fun".to_string(),
            message: "at least one function evaluation is required".to_string(),
        });
    }
    Ok(())
}

fn run<F, E, O>(
    mut f: F,
    (x1, x2): (f64, f64),
    options: &BoundedOptions,
    mut observer: O,
    context: &str,
) -> Result<BoundedMinimizeResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<OptimizeError>,
    O: BoundedObserver,
{
    validate(x1, x2, options, context)?;

    let x0 = x1 + GOLDEN_MEAN * (x2 - x1);
    let f0 = f(x0)?;
    let mut nfev = 1;
    let mut iterations = 0;
    let mut state = BrentState::new(x1, x2, options.xtol, x0, f0);
    observer.on_start(&state.record(nfev, x0, f0, StepKind::Initial));

    let mut status = TerminationStatus::Converged;
    while !state.is_converged() {
        if nfev >= options.max_fun {
            status = TerminationStatus::MaxEvaluationsExceeded;
            break;
        }

        let step = state.next_step();
        let x = state.trial_point();
        let fu = f(x)?;
        nfev += 1;
        iterations += 1;

        state.update(x, fu);
        observer.on_evaluation(&state.record(nfev, x, fu, step));

        if nfev >= options.max_fun {
            status = TerminationStatus::MaxEvaluationsExceeded;
            break;
        }
    }

    let result = BoundedMinimizeResult {
        x: state.xf,
        f_min: state.fx,
        nfev,
        iterations,
        bracket_width: state.b - state.a,
        status,
    };
    observer.on_finish(&result);
    Ok(result)
}

/// Bounded scalar minimization using Brent's method.
///
/// # Arguments
/// * `f` - Function to minimize
/// * `bounds` - (x1, x2) closed interval to search, `x1 <= x2`
/// * `options` - Solver options; `options.verbosity` selects the
///   diagnostics emitted through `tracing`
///
/// # Returns
/// Local minimum of `f` in `[x1, x2]`. Check
/// [`BoundedMinimizeResult::success`]: running out of evaluations is
/// reported through the status, not as an error.
///
/// # Errors
/// * `InvalidInterval` if x1 > x2 or either bound is not finite
/// * `InvalidParameter` if `xtol` is not positive or `max_fun` is zero
///
/// # Note
/// Finds *a* local minimizer; on multimodal functions the one returned
/// depends on the golden section starting point.
pub fn minimize_scalar_bounded<F>(
    mut f: F,
    bounds: (f64, f64),
    options: &BoundedOptions,
) -> OptimizeResult<BoundedMinimizeResult>
where
    F: FnMut(f64) -> f64,
{
    run(
        |x| Ok(f(x)),
        bounds,
        options,
        TracingObserver::new(options),
        "minimize_scalar_bounded",
    )
}

/// Bounded scalar minimization reporting progress to `observer`.
///
/// Same as [`minimize_scalar_bounded`] but diagnostics go to the supplied
/// observer instead of `tracing`. Pass `&mut observer` to inspect it
/// afterwards, or `()` for no output.
pub fn minimize_scalar_bounded_observed<F, O>(
    mut f: F,
    bounds: (f64, f64),
    options: &BoundedOptions,
    observer: O,
) -> OptimizeResult<BoundedMinimizeResult>
where
    F: FnMut(f64) -> f64,
    O: BoundedObserver,
{
    run(
        |x| Ok(f(x)),
        bounds,
        options,
        observer,
        "minimize_scalar_bounded_observed",
    )
}

/// Bounded scalar minimization of a fallible objective.
///
/// The first error returned by `f` aborts the run and is handed back
/// unchanged; argument errors are converted into `E`.
///
/// # Errors
/// * Any error returned by `f`
/// * `InvalidInterval` / `InvalidParameter`, converted through `E::from`
pub fn try_minimize_scalar_bounded<F, E, O>(
    f: F,
    bounds: (f64, f64),
    options: &BoundedOptions,
    observer: O,
) -> Result<BoundedMinimizeResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<OptimizeError>,
    O: BoundedObserver,
{
    run(f, bounds, options, observer, "try_minimize_scalar_bounded")
}

/// Minimizes `f` on `[x1, x2]` and returns only the minimizing abscissa.
///
/// The point is returned even when the evaluation budget ran out; use
/// [`minimize_scalar_bounded`] to tell the two cases apart.
pub fn fminbound<F>(mut f: F, x1: f64, x2: f64, options: &BoundedOptions) -> OptimizeResult<f64>
where
    F: FnMut(f64) -> f64,
{
    let result = run(
        |x| Ok::<f64, OptimizeError>(f(x)),
        (x1, x2),
        options,
        TracingObserver::new(options),
        "fminbound",
    )?;
    Ok(result.x)
}

/// Bounded scalar minimization with bounds given as tensors.
///
/// Each bound must hold exactly one F32 or F64 element (0-D or
/// single-element tensors); it is read back to the host before the search.
///
/// # Errors
/// * `InvalidInput` if a bound holds more than one element
/// * `NumrError` if a bound has an unsupported dtype
/// * Everything [`minimize_scalar_bounded`] can return
pub fn minimize_scalar_bounded_tensor<R, F>(
    mut f: F,
    lower: &Tensor<R>,
    upper: &Tensor<R>,
    options: &BoundedOptions,
) -> OptimizeResult<BoundedMinimizeResult>
where
    R: Runtime,
    F: FnMut(f64) -> f64,
{
    let context = "minimize_scalar_bounded_tensor";
    let x1 = scalar_from_tensor(lower, context)?;
    let x2 = scalar_from_tensor(upper, context)?;
    run(
        |x| Ok(f(x)),
        (x1, x2),
        options,
        TracingObserver::new(options),
        context,
    )
}
