#[cfg(test)]
#[path = "../../tests/unit/event/writer_test.rs"]
mod writer_test;

use planner_core::models::Event;
use planner_core::utils::GenericResult;
use std::io::{BufWriter, Write};

/// Writes event in the text format, so it can be read back by [`EventProblem`](super::EventProblem).
pub fn write_event<W: Write>(event: &Event, writer: BufWriter<W>) -> GenericResult<()> {
    let mut writer = writer;

    let is_invalid_name = |name: &str| name.is_empty() || name.contains(char::is_whitespace);

    if let Some(activity) = event.activities.iter().find(|activity| is_invalid_name(activity.name.as_str())) {
        return Err(format!("cannot write activity name '{}': it has spaces or is empty", activity.name).into());
    }

    writeln!(writer, "{}", event.size())?;
    writeln!(writer, "{} {}", event.max_time, event.max_budget)?;

    for activity in event.activities.iter() {
        writeln!(writer, "{} {} {} {}", activity.name, activity.time, activity.cost, activity.enjoyment)?;
    }

    writer.flush()?;

    Ok(())
}
