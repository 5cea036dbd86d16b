//! Contains functionality to write planning reports with results of one or more solvers.

#[cfg(test)]
#[path = "../../tests/unit/report/report_test.rs"]
mod report_test;

mod json_writer;
pub use self::json_writer::*;

mod text_writer;
pub use self::text_writer::write_text_report;

use planner_core::models::{Event, Solution};
use planner_core::solver::SolverKind;

/// A result of a single solver run.
#[derive(Clone, Debug)]
pub struct SolverRun {
    /// A solver which produced solution.
    pub kind: SolverKind,
    /// A found solution.
    pub solution: Solution,
    /// Solver execution time in seconds.
    pub duration: f64,
}

impl SolverRun {
    /// Creates a new instance of `SolverRun`.
    pub fn new(kind: SolverKind, solution: Solution, duration: f64) -> Self {
        Self { kind, solution, duration }
    }
}

/// Keeps everything needed to write a report.
pub struct ReportContext<'a> {
    /// A name of the event input, usually a file path.
    pub input: &'a str,
    /// A solved event.
    pub event: &'a Event,
    /// Solver runs in the order they were executed.
    pub runs: &'a [SolverRun],
}

/// Returns a human-readable title of the solver.
pub(crate) fn get_solver_title(kind: SolverKind) -> &'static str {
    match kind {
        SolverKind::Exhaustive => "BRUTE FORCE",
        SolverKind::Dynamic => "DYNAMIC PROGRAMMING",
    }
}
