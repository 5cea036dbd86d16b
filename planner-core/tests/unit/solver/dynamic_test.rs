use super::*;
use crate::checker::check_solution;
use crate::helpers::*;
use crate::models::Activity;

fn solve(event: &Event) -> Solution {
    DynamicProgramming::new(test_environment()).solve(event).unwrap()
}

#[test]
fn can_find_optimum_for_simple_event() {
    let event = create_abc_event(5);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["A", "B"]);
    assert_eq!(solution.enjoyment, 130);
    assert_eq!(solution.time_used, 5);
    assert!(solution.is_complete);
}

parameterized_test! {can_return_empty_solution, (max_time, activities), {
    can_return_empty_solution_impl(max_time, activities);
}}

can_return_empty_solution! {
    case01_zero_max_time: (0, vec![("A", 2, 50), ("B", 3, 80)]),
    case02_nothing_fits: (1, vec![("Too-Long-1", 2, 10), ("Too-Long-2", 3, 100)]),
    case03_no_activities: (10, vec![]),
    case04_only_zero_enjoyment: (10, vec![("A", 2, 0), ("B", 3, 0)]),
}

fn can_return_empty_solution_impl(max_time: usize, activities: Vec<(&str, usize, usize)>) {
    let event = create_event(max_time, activities.as_slice());

    let solution = solve(&event);

    assert!(solution.chosen.is_empty());
    assert_eq!(solution.enjoyment, 0);
    assert_eq!(solution.time_used, 0);
}

#[test]
fn can_select_single_fitting_activity() {
    let solution = solve(&create_event(5, &[("A", 3, 100)]));

    assert_eq!(solution.names(), vec!["A"]);
    assert_eq!(solution.enjoyment, 100);
    assert_eq!(solution.time_used, 3);
}

#[test]
fn can_select_all_activities_with_large_max_time() {
    let event = create_event(1000, &[("A", 2, 50), ("B", 3, 80), ("C", 4, 100), ("D", 5, 120)]);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["A", "B", "C", "D"]);
    assert_eq!(solution.enjoyment, 350);
    assert_eq!(solution.time_used, 14);
}

#[test]
fn can_choose_two_of_identical_activities() {
    let event = create_event(5, &[("A", 2, 50), ("B", 2, 50), ("C", 2, 50)]);

    let solution = solve(&event);

    assert_eq!(solution.chosen.len(), 2);
    assert_eq!(solution.enjoyment, 100);
    assert_eq!(solution.time_used, 4);
}

#[test]
fn can_skip_zero_enjoyment_activities() {
    let event = create_event(10, &[("A", 2, 0), ("B", 3, 50), ("C", 4, 0)]);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["B"]);
    assert_eq!(solution.enjoyment, 50);
    assert_eq!(solution.time_used, 3);
}

#[test]
fn can_select_zero_time_activities_with_zero_max_time() {
    let event = create_event(0, &[("A", 0, 5), ("B", 0, 0), ("C", 1, 9)]);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["A"]);
    assert_eq!(solution.enjoyment, 5);
    assert_eq!(solution.time_used, 0);
    assert_eq!(check_solution(&event, &solution), Ok(()));
}

#[test]
fn can_prefer_smaller_time_on_tie() {
    let event = create_event(2, &[("A", 1, 10), ("B", 2, 10)]);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["A"]);
    assert_eq!(solution.time_used, 1);
}

#[test]
fn can_reconstruct_selection_using_taken_activity_values() {
    let event = create_event(10, &[("A", 2, 30), ("B", 3, 50), ("C", 4, 70), ("D", 5, 90), ("E", 2, 40)]);

    let solution = solve(&event);

    assert_eq!(check_solution(&event, &solution), Ok(()));
    assert_eq!(solution.enjoyment, get_reference_optimum(&event).0);
    assert_eq!(solution.enjoyment, 180);
}

#[test]
fn can_return_activities_in_source_order_without_mutation() {
    let event = create_event(9, &[("Z", 4, 100), ("Y", 1, 5), ("X", 5, 120)]);
    let snapshot = get_activities_snapshot(&event);

    let solution = solve(&event);

    assert_eq!(solution.names(), vec!["Z", "X"]);
    assert_same_activities(&event, snapshot.as_slice());
    assert_eq!(check_solution(&event, &solution), Ok(()));
}

#[test]
fn can_reject_table_exceeding_limit() {
    let event = create_event(1000, &[("A", 600, 10), ("B", 600, 20)]);

    let result = DynamicProgramming::new(test_environment()).with_max_cells(100).solve(&event);

    assert_eq!(
        result.err().map(|err| err.to_string()),
        Some("table of 3x1001 cells exceeds the limit of 100 cells".to_string())
    );
}

#[test]
fn can_limit_table_by_total_time_of_activities() {
    let event = Event::new(usize::MAX, 0, vec![Activity::new("A", 2, 0, 10), Activity::new("B", 3, 0, 20)]);

    let solution = DynamicProgramming::new(test_environment()).with_max_cells(18).solve(&event).unwrap();

    assert_eq!(solution.names(), vec!["A", "B"]);
    assert_eq!(solution.time_used, 5);
}

#[test]
fn can_match_reference_optimum_on_random_small_events() {
    let mut rng = create_rng(1337);

    (0..50).for_each(|_| {
        let event = create_random_event(&mut rng, (1, 12), (0, 15), (0, 6), (0, 250));

        let solution = solve(&event);

        assert_eq!(check_solution(&event, &solution), Ok(()));
        assert_eq!((solution.enjoyment, solution.time_used), get_reference_optimum(&event));
    });
}
