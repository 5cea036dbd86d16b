use super::*;

fn create_settings(activities: usize, seed: Option<u64>) -> GenerateSettings {
    GenerateSettings { activities, max_time: 30, max_budget: 500, seed }
}

#[test]
fn can_generate_event_within_ranges() {
    let event = generate_event(&create_settings(200, Some(1))).unwrap();

    assert_eq!(event.size(), 200);
    assert_eq!(event.max_time, 30);
    assert_eq!(event.max_budget, 500);
    event.activities.iter().enumerate().for_each(|(idx, activity)| {
        assert_eq!(activity.name, format!("Activity-{}", idx + 1));
        assert!(TIME_RANGE.contains(&activity.time));
        assert!(COST_RANGE.contains(&activity.cost));
        assert!(ENJOYMENT_RANGE.contains(&activity.enjoyment));
    });
}

#[test]
fn can_generate_same_event_with_same_seed() {
    let first = generate_event(&create_settings(50, Some(3))).unwrap();
    let second = generate_event(&create_settings(50, Some(3))).unwrap();

    assert!(first.activities.iter().zip(second.activities.iter()).all(|(a, b)| a == b));
}

#[test]
fn can_generate_event_without_seed() {
    let event = generate_event(&create_settings(5, None)).unwrap();

    assert_eq!(event.size(), 5);
}

#[test]
fn can_reject_empty_event() {
    assert!(generate_event(&create_settings(0, Some(1))).is_err());
}
