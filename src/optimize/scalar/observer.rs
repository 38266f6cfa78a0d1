//! Observation hooks for bounded minimization.
//!
//! The minimizer reports its progress to a [`BoundedObserver`] at three
//! points: after the initial evaluation, after every evaluation inside the
//! main loop, and once the result is built. Observers only ever see
//! snapshots, so they cannot influence the search.

use std::fmt;

use super::{BoundedMinimizeResult, BoundedOptions, TerminationStatus, Verbosity};

/// How the abscissa of an evaluation was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// The starting point at the golden section of the interval.
    Initial,
    /// Vertex of the parabola through the three retained points.
    Parabolic,
    /// Golden section step into the larger half of the bracket.
    Golden,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Parabolic => write!(f, "parabolic"),
            Self::Golden => write!(f, "golden"),
        }
    }
}

/// Snapshot taken right after a function evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationRecord {
    /// Evaluations performed so far, this one included
    pub nfev: usize,
    /// Point that was evaluated
    pub x: f64,
    /// Function value at `x`
    pub fx: f64,
    /// How `x` was chosen
    pub step: StepKind,
    /// Best point after the bracket update
    pub best_x: f64,
    /// Function value at `best_x`
    pub best_f: f64,
    /// Lower end of the bracket after the update
    pub lower: f64,
    /// Upper end of the bracket after the update
    pub upper: f64,
}

/// Receives progress notifications from the bounded minimizer.
///
/// All hooks default to doing nothing; `()` is the silent observer.
pub trait BoundedObserver {
    /// Called once after the initial evaluation.
    fn on_start(&mut self, _record: &EvaluationRecord) {}

    /// Called after each evaluation of the main loop.
    fn on_evaluation(&mut self, _record: &EvaluationRecord) {}

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &BoundedMinimizeResult) {}
}

impl BoundedObserver for () {}

impl<O: BoundedObserver + ?Sized> BoundedObserver for &mut O {
    fn on_start(&mut self, record: &EvaluationRecord) {
        (**self).on_start(record);
    }

    fn on_evaluation(&mut self, record: &EvaluationRecord) {
        (**self).on_evaluation(record);
    }

    fn on_finish(&mut self, result: &BoundedMinimizeResult) {
        (**self).on_finish(result);
    }
}

/// Emits diagnostics as `tracing` events according to a [`Verbosity`].
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    verbosity: Verbosity,
    xtol: f64,
    max_fun: usize,
}

impl TracingObserver {
    /// Takes the diagnostic level and limits from `options`.
    pub fn new(options: &BoundedOptions) -> Self {
        Self {
            verbosity: options.verbosity,
            xtol: options.xtol,
            max_fun: options.max_fun,
        }
    }

    fn trace(&self, record: &EvaluationRecord) {
        if self.verbosity >= Verbosity::Iterations {
            tracing::debug!(
                target: "fminbound::bounded",
                nfev = record.nfev,
                x = record.x,
                fx = record.fx,
                step = %record.step,
                "evaluation"
            );
        }
    }
}

impl BoundedObserver for TracingObserver {
    fn on_start(&mut self, record: &EvaluationRecord) {
        self.trace(record);
    }

    fn on_evaluation(&mut self, record: &EvaluationRecord) {
        self.trace(record);
    }

    fn on_finish(&mut self, result: &BoundedMinimizeResult) {
        match result.status {
            TerminationStatus::Converged if self.verbosity >= Verbosity::Convergence => {
                tracing::info!(
                    target: "fminbound::bounded",
                    xtol = self.xtol,
                    nfev = result.nfev,
                    x = result.x,
                    "optimization terminated successfully"
                );
            }
            TerminationStatus::MaxEvaluationsExceeded if self.verbosity >= Verbosity::Warnings => {
                tracing::warn!(
                    target: "fminbound::bounded",
                    max_fun = self.max_fun,
                    x = result.x,
                    "maximum number of function evaluations exceeded, increase max_fun"
                );
            }
            _ => {}
        }
    }
}

/// Keeps every snapshot and the final result in memory.
#[derive(Debug, Clone, Default)]
pub struct EvaluationRecorder {
    /// Snapshots in evaluation order, the initial one first
    pub records: Vec<EvaluationRecord>,
    /// Final result, once the run has finished
    pub result: Option<BoundedMinimizeResult>,
}

impl EvaluationRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Best function value after each evaluation.
    pub fn best_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.best_f).collect()
    }
}

impl BoundedObserver for EvaluationRecorder {
    fn on_start(&mut self, record: &EvaluationRecord) {
        self.records.push(*record);
    }

    fn on_evaluation(&mut self, record: &EvaluationRecord) {
        self.records.push(*record);
    }

    fn on_finish(&mut self, result: &BoundedMinimizeResult) {
        self.result = Some(result.clone());
    }
}
