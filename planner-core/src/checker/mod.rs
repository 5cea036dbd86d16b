//! This module provides functionality to automatically check that given solution is feasible
//! and consistent with the event it was produced for.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::models::{Event, Solution};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Checks solution against the event and returns all found violations.
pub fn check_solution(event: &Event, solution: &Solution) -> Result<(), Vec<String>> {
    let errors = check_totals(solution)
        .err()
        .into_iter()
        .chain(check_capacity(event, solution).err())
        .chain(check_provenance(event, solution).err())
        .flatten()
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_totals(solution: &Solution) -> Result<(), Vec<String>> {
    let time_used = solution.chosen.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.time));
    let enjoyment = solution.chosen.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.enjoyment));

    let errors = [
        (time_used != solution.time_used)
            .then(|| format!("time used mismatch: reported {}, actual {time_used}", solution.time_used)),
        (enjoyment != solution.enjoyment)
            .then(|| format!("enjoyment mismatch: reported {}, actual {enjoyment}", solution.enjoyment)),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn check_capacity(event: &Event, solution: &Solution) -> Result<(), Vec<String>> {
    if solution.time_used > event.max_time {
        Err(vec![format!("time constraint violated: {} > {}", solution.time_used, event.max_time)])
    } else {
        Ok(())
    }
}

fn check_provenance(event: &Event, solution: &Solution) -> Result<(), Vec<String>> {
    let (_, errors) = solution.chosen.iter().fold(
        (FxHashSet::<*const _>::default(), Vec::default()),
        |(mut used, mut errors), activity| {
            if event.index_of(activity).is_none() {
                errors.push(format!("unknown activity in solution: '{}'", activity.name));
            }

            if !used.insert(Arc::as_ptr(activity)) {
                errors.push(format!("duplicate activity in solution: '{}'", activity.name));
            }

            (used, errors)
        },
    );

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
