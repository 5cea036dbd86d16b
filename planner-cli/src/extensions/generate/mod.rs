//! Contains functionality to generate random events for testing and benchmarking.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use planner_core::models::{Activity, Event};
use planner_core::utils::GenericResult;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

const TIME_RANGE: RangeInclusive<usize> = 1..=10;
const COST_RANGE: RangeInclusive<usize> = 0..=200;
const ENJOYMENT_RANGE: RangeInclusive<usize> = 0..=250;

/// Specifies a shape of generated event.
#[derive(Clone, Debug)]
pub struct GenerateSettings {
    /// Amount of activities.
    pub activities: usize,
    /// Event time limit.
    pub max_time: usize,
    /// Event budget.
    pub max_budget: usize,
    /// A random seed, entropy is used when not set.
    pub seed: Option<u64>,
}

/// Generates an event with random activities named `Activity-<i>`.
pub fn generate_event(settings: &GenerateSettings) -> GenericResult<Event> {
    if settings.activities == 0 {
        return Err("amount of activities should be positive".into());
    }

    let mut rng = settings.seed.map_or_else(SmallRng::from_entropy, SmallRng::seed_from_u64);

    let activities = (0..settings.activities)
        .map(|idx| {
            Activity::new(
                format!("Activity-{}", idx + 1).as_str(),
                rng.gen_range(TIME_RANGE),
                rng.gen_range(COST_RANGE),
                rng.gen_range(ENJOYMENT_RANGE),
            )
        })
        .collect();

    Ok(Event::new(settings.max_time, settings.max_budget, activities))
}
