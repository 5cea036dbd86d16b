use crate::models::{Activity, Event};
use std::sync::Arc;

/// Represents a selection of activities produced by a solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Chosen activities in ascending order of their index in the event. They reference
    /// the event's activities, no copies are made.
    pub chosen: Vec<Arc<Activity>>,
    /// Total enjoyment of chosen activities.
    pub enjoyment: usize,
    /// Total time of chosen activities.
    pub time_used: usize,
    /// False if the solver was interrupted by its quota and the solution may be suboptimal.
    pub is_complete: bool,
}

impl Solution {
    /// Creates an empty complete solution.
    pub fn empty() -> Self {
        Self { chosen: vec![], enjoyment: 0, time_used: 0, is_complete: true }
    }

    /// Creates a solution from activity indices in the given event. Totals saturate on overflow.
    pub(crate) fn from_indices(event: &Event, indices: &[usize], is_complete: bool) -> Self {
        let chosen = indices.iter().map(|&idx| event.activities[idx].clone()).collect::<Vec<_>>();
        let enjoyment = chosen.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.enjoyment));
        let time_used = chosen.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.time));

        Self { chosen, enjoyment, time_used, is_complete }
    }

    /// Returns names of chosen activities keeping their order.
    pub fn names(&self) -> Vec<&str> {
        self.chosen.iter().map(|activity| activity.name.as_str()).collect()
    }
}
