use super::*;
use crate::event::EventProblem;
use crate::helpers::*;
use planner_core::models::Activity;

fn write_to_string(event: &Event) -> GenericResult<String> {
    let mut buffer = Vec::new();
    write_event(event, BufWriter::new(&mut buffer))?;

    Ok(String::from_utf8(buffer).unwrap())
}

#[test]
fn can_write_event() {
    let event = create_test_event();

    let result = write_to_string(&event).unwrap();

    assert_eq!(result, "3\n10 500\nMuseum-Trip 3 40 120\nPizza-Workshop 2 30 100\nGame-Night 4 20 150\n");
}

#[test]
fn can_read_written_event() {
    let event = create_test_event();

    let restored = write_to_string(&event).unwrap().read_event().unwrap();

    assert_eq!(restored.max_time, event.max_time);
    assert_eq!(restored.max_budget, event.max_budget);
    assert_eq!(get_activity_names(&restored), get_activity_names(&event));
}

parameterized_test! {can_reject_unwritable_name, name, {
    let event = Event::new(1, 1, vec![Activity::new(name, 1, 1, 1)]);

    let result = write_to_string(&event);

    assert!(result.is_err());
}}

can_reject_unwritable_name! {
    case01_empty: "",
    case02_space: "Game Night",
    case03_tab: "Game\tNight",
}
