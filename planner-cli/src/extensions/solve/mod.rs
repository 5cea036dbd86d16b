//! Contains functionality to run configured solvers on an event.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/solve_test.rs"]
mod solve_test;

pub mod config;

use planner_core::models::Event;
use planner_core::solver::*;
use planner_core::utils::{Environment, GenericResult, Timer};
use planner_text::report::SolverRun;
use std::sync::Arc;

/// Specifies how an event is solved.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveSettings {
    /// Solvers to run in the given order.
    pub algorithms: Vec<SolverKind>,
    /// A time limit of exhaustive search in seconds.
    pub time_limit: f64,
    /// A maximum amount of dynamic programming table cells.
    pub max_cells: usize,
    /// Enables solver logging to stdout.
    pub is_logging_enabled: bool,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self {
            algorithms: vec![SolverKind::Exhaustive],
            time_limit: DEFAULT_TIME_LIMIT,
            max_cells: DEFAULT_MAX_CELLS,
            is_logging_enabled: false,
        }
    }
}

/// Parses an algorithm argument: a solver kind name or `all`.
pub fn parse_algorithms(value: &str) -> GenericResult<Vec<SolverKind>> {
    match value {
        "all" => Ok(SolverKind::all().to_vec()),
        _ => value.parse::<SolverKind>().map(|kind| vec![kind]),
    }
}

/// Runs all solvers specified in settings and measures their execution time.
pub fn solve_event(event: &Event, settings: &SolveSettings) -> GenericResult<Vec<SolverRun>> {
    let environment =
        Arc::new(if settings.is_logging_enabled { Environment::default() } else { Environment::silent() });

    settings
        .algorithms
        .iter()
        .map(|&kind| {
            let solver = create_solver(kind, settings, environment.clone());
            let (solution, duration) = Timer::measure_duration(|| solver.solve(event));

            solution
                .map(|solution| SolverRun::new(kind, solution, duration.as_secs_f64()))
                .map_err(|err| err.with_context(kind.name()))
        })
        .collect()
}

fn create_solver(kind: SolverKind, settings: &SolveSettings, environment: Arc<Environment>) -> Box<dyn Solver> {
    match kind {
        SolverKind::Exhaustive => Box::new(ExhaustiveSearch::new(environment).with_time_limit(settings.time_limit)),
        SolverKind::Dynamic => Box::new(DynamicProgramming::new(environment).with_max_cells(settings.max_cells)),
    }
}
