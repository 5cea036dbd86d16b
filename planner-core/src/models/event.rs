#[cfg(test)]
#[path = "../../tests/unit/models/event_test.rs"]
mod event_test;

use std::sync::Arc;

/// Represents a candidate unit of selection: something which takes time and brings enjoyment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    /// An activity name, expected to be unique within an event.
    pub name: String,
    /// Time needed for activity in hours.
    pub time: usize,
    /// Activity cost in currency units. Not used by solvers.
    pub cost: usize,
    /// An enjoyment score which is maximized.
    pub enjoyment: usize,
}

impl Activity {
    /// Creates a new instance of `Activity`.
    pub fn new(name: &str, time: usize, cost: usize, enjoyment: usize) -> Self {
        Self { name: name.to_string(), time, cost, enjoyment }
    }
}

/// An optimization instance: event time and budget limits plus the list of candidate activities.
///
/// Activities are shared via `Arc`: solutions reference the same entities, so identity can be
/// checked with `Arc::ptr_eq`. An order of activities is significant for search order and tie
/// breaking, solvers never reorder or mutate it.
#[derive(Clone, Debug)]
pub struct Event {
    /// A maximum total time of selected activities (knapsack capacity).
    pub max_time: usize,
    /// A maximum budget. It is loaded and reported, but not enforced by solvers.
    pub max_budget: usize,
    /// Candidate activities.
    pub activities: Vec<Arc<Activity>>,
}

impl Event {
    /// Creates a new instance of `Event`.
    pub fn new(max_time: usize, max_budget: usize, activities: Vec<Activity>) -> Self {
        Self { max_time, max_budget, activities: activities.into_iter().map(Arc::new).collect() }
    }

    /// Returns amount of candidate activities.
    pub fn size(&self) -> usize {
        self.activities.len()
    }

    /// Returns total time of all activities. Saturates on overflow.
    pub fn total_time(&self) -> usize {
        self.activities.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.time))
    }

    /// Returns total enjoyment of all activities or `None` if it overflows `usize`.
    pub fn total_enjoyment(&self) -> Option<usize> {
        self.activities.iter().try_fold(0_usize, |acc, activity| acc.checked_add(activity.enjoyment))
    }

    /// Returns index of given activity using identity comparison.
    pub fn index_of(&self, activity: &Arc<Activity>) -> Option<usize> {
        self.activities.iter().position(|other| Arc::ptr_eq(other, activity))
    }
}
