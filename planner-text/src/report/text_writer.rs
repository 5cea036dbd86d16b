use super::{ReportContext, SolverRun, get_solver_title};
use planner_core::models::Activity;
use planner_core::utils::GenericResult;
use std::io::{BufWriter, Write};

const SEPARATOR: &str = "========================================";

/// Writes a human-readable report.
pub fn write_text_report<W: Write>(report_ctx: &ReportContext, writer: BufWriter<W>) -> GenericResult<()> {
    let mut writer = writer;
    let event = report_ctx.event;

    writeln!(writer, "{SEPARATOR}\nEVENT PLANNER - RESULTS\n{SEPARATOR}\n")?;
    writeln!(writer, "Input File: {}", report_ctx.input)?;
    writeln!(writer, "Available Time: {} hours", event.max_time)?;
    writeln!(writer, "Available Budget: £{}", event.max_budget)?;
    writeln!(writer, "Constraint: Time")?;

    report_ctx.runs.iter().try_for_each(|run| write_run(run, &mut writer))?;

    writer.flush()?;

    Ok(())
}

fn write_run<W: Write>(run: &SolverRun, writer: &mut BufWriter<W>) -> GenericResult<()> {
    let solution = &run.solution;

    writeln!(writer, "\n--- {} ALGORITHM ---", get_solver_title(run.kind))?;
    writeln!(writer, "Selected Activities:")?;

    if solution.chosen.is_empty() {
        writeln!(writer, "- none")?;
    }

    for activity in solution.chosen.iter() {
        writeln!(writer, "- {}", format_activity(activity))?;
    }

    writeln!(writer, "\nTotal Enjoyment: {}", solution.enjoyment)?;
    writeln!(writer, "Total Time Used: {} hours\n", solution.time_used)?;
    writeln!(writer, "Execution Time: {:.5} seconds", run.duration)?;

    if !solution.is_complete {
        writeln!(writer, "Note: time limit was reached, the result might be not optimal")?;
    }

    Ok(())
}

fn format_activity(activity: &Activity) -> String {
    format!("{} ({} hours, £{}, enjoyment {})", activity.name, activity.time, activity.cost, activity.enjoyment)
}
