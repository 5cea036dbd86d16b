use crate::models::{Activity, Event};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Creates an event from `(name, time, enjoyment)` tuples. Cost is set to zero.
pub fn create_event(max_time: usize, activities: &[(&str, usize, usize)]) -> Event {
    Event::new(
        max_time,
        0,
        activities.iter().map(|&(name, time, enjoyment)| Activity::new(name, time, 0, enjoyment)).collect(),
    )
}

/// Creates an event with three activities used in many scenarios.
pub fn create_abc_event(max_time: usize) -> Event {
    create_event(max_time, &[("A", 2, 50), ("B", 3, 80), ("C", 4, 100)])
}

/// Creates a random event with `Activity-<i>` names.
pub fn create_random_event(
    rng: &mut SmallRng,
    size: (usize, usize),
    max_time: (usize, usize),
    time: (usize, usize),
    enjoyment: (usize, usize),
) -> Event {
    let size = rng.gen_range(size.0..=size.1);
    let max_time = rng.gen_range(max_time.0..=max_time.1);

    let activities = (0..size)
        .map(|idx| {
            Activity::new(
                format!("Activity-{idx}").as_str(),
                rng.gen_range(time.0..=time.1),
                rng.gen_range(0..=200),
                rng.gen_range(enjoyment.0..=enjoyment.1),
            )
        })
        .collect();

    Event::new(max_time, 9999, activities)
}

pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Enumerates all subsets and returns the best `(enjoyment, time_used)` pair preferring smaller
/// time among subsets with the same enjoyment.
pub fn get_reference_optimum(event: &Event) -> (usize, usize) {
    let size = event.size();
    assert!(size < 20, "reference enumeration is too slow for {size} activities");

    (0_u32..(1 << size))
        .filter_map(|mask| {
            let (time, enjoyment) = event
                .activities
                .iter()
                .enumerate()
                .filter(|(idx, _)| mask & (1 << idx) != 0)
                .fold((0, 0), |(time, enjoyment), (_, activity)| {
                    (time + activity.time, enjoyment + activity.enjoyment)
                });

            (time <= event.max_time).then_some((enjoyment, time))
        })
        .fold((0, 0), |(best_enjoyment, best_time), (enjoyment, time)| {
            if enjoyment > best_enjoyment || (enjoyment == best_enjoyment && time < best_time) {
                (enjoyment, time)
            } else {
                (best_enjoyment, best_time)
            }
        })
}

/// Returns a snapshot of event activities to check that the event is not mutated.
pub fn get_activities_snapshot(event: &Event) -> Vec<Arc<Activity>> {
    event.activities.clone()
}

/// Asserts that the event has the same activities in the same order as in the snapshot.
pub fn assert_same_activities(event: &Event, snapshot: &[Arc<Activity>]) {
    assert_eq!(event.activities.len(), snapshot.len());
    event.activities.iter().zip(snapshot.iter()).for_each(|(actual, expected)| {
        assert!(Arc::ptr_eq(actual, expected));
        assert_eq!(actual.as_ref(), expected.as_ref());
    });
}
