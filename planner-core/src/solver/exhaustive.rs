#[cfg(test)]
#[path = "../../tests/unit/solver/exhaustive_test.rs"]
mod exhaustive_test;

use crate::models::{Event, Solution};
use crate::solver::{Solver, validate_event};
use crate::utils::{Environment, GenericResult, Quota, TimeQuota, Timer};
use std::sync::Arc;

/// A default time limit in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 600.;

/// Explores all take/skip decisions for each activity in a depth-first order.
///
/// At every node the skip branch is explored first and its result becomes the current best.
/// The take branch replaces it only when it brings strictly more enjoyment, so, among solutions
/// with equal enjoyment, the one reached first in skip-first order wins: for two interchangeable
/// activities the later one is kept.
///
/// The search is bounded by a quota which is polled on every node entry. When the quota is
/// reached, each pending node returns its current partial selection and the best solution
/// found so far is returned with `is_complete` set to false.
pub struct ExhaustiveSearch {
    environment: Arc<Environment>,
    time_limit: f64,
}

/// Search statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Amount of visited search nodes.
    pub nodes: usize,
    /// Amount of leaves where all activities were decided.
    pub leaves: usize,
    /// True if the quota was reached before search space was exhausted.
    pub is_interrupted: bool,
}

impl ExhaustiveSearch {
    /// Creates a new instance of `ExhaustiveSearch` with default time limit.
    pub fn new(environment: Arc<Environment>) -> Self {
        Self { environment, time_limit: DEFAULT_TIME_LIMIT }
    }

    /// Sets wall-clock time limit in seconds. It is validated when `solve` is called.
    pub fn with_time_limit(mut self, time_limit: f64) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Returns time limit in seconds.
    pub fn time_limit(&self) -> f64 {
        self.time_limit
    }

    /// Runs the search using given quota instead of wall-clock time limit.
    pub fn solve_with_quota(&self, event: &Event, quota: &dyn Quota) -> Solution {
        self.solve_with_statistics(event, quota).0
    }

    /// Runs the search using given quota and returns search statistics together with solution.
    pub fn solve_with_statistics(&self, event: &Event, quota: &dyn Quota) -> (Solution, SearchStatistics) {
        let logger = self.environment.logger.as_ref();
        logger(&format!("exhaustive search started: activities: {}, max time: {}", event.size(), event.max_time));

        let timer = Timer::start();
        let mut statistics = SearchStatistics::default();
        let best = search(event, quota, &mut statistics);
        let solution = Solution::from_indices(event, best.chosen.as_slice(), !statistics.is_interrupted);

        logger(&format!(
            "exhaustive search {} in {}ms: nodes: {}, leaves: {}, enjoyment: {}, time used: {}",
            if statistics.is_interrupted { "interrupted by quota" } else { "completed" },
            timer.elapsed_millis(),
            statistics.nodes,
            statistics.leaves,
            solution.enjoyment,
            solution.time_used
        ));

        (solution, statistics)
    }
}

impl Solver for ExhaustiveSearch {
    fn solve(&self, event: &Event) -> GenericResult<Solution> {
        let quota = TimeQuota::new(self.time_limit)?;
        validate_event(event)?;

        Ok(self.solve_with_quota(event, &quota))
    }
}

/// A solution candidate: indices of chosen activities with their total enjoyment.
#[derive(Default)]
struct Candidate {
    chosen: Vec<usize>,
    enjoyment: usize,
}

/// Specifies which part of the node is processed next.
#[derive(Clone, Copy)]
enum Step {
    Enter,
    AfterSkip,
    AfterTake,
}

/// A pending node of the decision tree.
struct Frame {
    index: usize,
    time_used: usize,
    enjoyment: usize,
    step: Step,
    best: Option<Candidate>,
}

impl Frame {
    fn new(index: usize, time_used: usize, enjoyment: usize) -> Self {
        Self { index, time_used, enjoyment, step: Step::Enter, best: None }
    }
}

/// Runs depth-first search with an explicit frame stack, so the depth is limited by heap, not
/// by thread stack size.
fn search(event: &Event, quota: &dyn Quota, statistics: &mut SearchStatistics) -> Candidate {
    let activities = event.activities.as_slice();

    // indices of activities taken on the path from root to the current node
    let mut selection: Vec<usize> = Vec::with_capacity(activities.len());
    let mut stack: Vec<Frame> = Vec::with_capacity(activities.len() + 1);
    // a value returned by the most recently finished node
    let mut returned: Option<Candidate> = None;

    stack.push(Frame::new(0, 0, 0));

    while let Some(frame) = stack.last_mut() {
        match frame.step {
            Step::Enter => {
                statistics.nodes += 1;

                let is_leaf = frame.index == activities.len();
                let is_stopped = !is_leaf && quota.is_reached();

                if is_leaf || is_stopped {
                    statistics.leaves += usize::from(is_leaf);
                    statistics.is_interrupted |= is_stopped;

                    returned = Some(Candidate { chosen: selection.clone(), enjoyment: frame.enjoyment });
                    stack.pop();
                } else {
                    frame.step = Step::AfterSkip;
                    let skip = Frame::new(frame.index + 1, frame.time_used, frame.enjoyment);
                    stack.push(skip);
                }
            }
            Step::AfterSkip => {
                frame.best = returned.take();

                let activity = &activities[frame.index];
                match frame.time_used.checked_add(activity.time).filter(|&time_used| time_used <= event.max_time) {
                    Some(time_used) => {
                        frame.step = Step::AfterTake;
                        selection.push(frame.index);
                        let take =
                            Frame::new(frame.index + 1, time_used, frame.enjoyment.saturating_add(activity.enjoyment));
                        stack.push(take);
                    }
                    None => {
                        returned = frame.best.take();
                        stack.pop();
                    }
                }
            }
            Step::AfterTake => {
                selection.pop();

                returned = match (frame.best.take(), returned.take()) {
                    (Some(skip), Some(take)) => Some(if take.enjoyment > skip.enjoyment { take } else { skip }),
                    (skip, take) => skip.or(take),
                };
                stack.pop();
            }
        }
    }

    debug_assert!(selection.is_empty());

    returned.unwrap_or_default()
}
