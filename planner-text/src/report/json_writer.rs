use super::{ReportContext, SolverRun};
use planner_core::utils::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};

/// A report in a serializable form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// A name of the event input.
    pub input: String,
    /// Event constraints.
    pub constraints: ReportConstraints,
    /// Results per solver.
    pub results: Vec<ReportResult>,
}

/// Event constraints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConstraints {
    /// Available time in hours.
    pub max_time: usize,
    /// Available budget, informational only.
    pub max_budget: usize,
}

/// A result of a single solver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    /// A solver name.
    pub algorithm: String,
    /// Selected activities.
    pub activities: Vec<ReportActivity>,
    /// Total enjoyment.
    pub total_enjoyment: usize,
    /// Total time used in hours.
    pub total_time: usize,
    /// Total cost of selected activities.
    pub total_cost: usize,
    /// Execution time in seconds.
    pub execution_time: f64,
    /// False if the solver was stopped by its time limit.
    pub is_complete: bool,
}

/// A selected activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportActivity {
    /// Activity name.
    pub name: String,
    /// Activity time in hours.
    pub time: usize,
    /// Activity cost.
    pub cost: usize,
    /// Activity enjoyment.
    pub enjoyment: usize,
}

impl From<&ReportContext<'_>> for Report {
    fn from(report_ctx: &ReportContext) -> Self {
        Self {
            input: report_ctx.input.to_string(),
            constraints: ReportConstraints {
                max_time: report_ctx.event.max_time,
                max_budget: report_ctx.event.max_budget,
            },
            results: report_ctx.runs.iter().map(create_result).collect(),
        }
    }
}

/// Writes a report as json.
pub fn write_json_report<W: Write>(report_ctx: &ReportContext, writer: BufWriter<W>) -> GenericResult<()> {
    let mut writer = writer;

    serde_json::to_writer_pretty(&mut writer, &Report::from(report_ctx)).map_err(|err| err.to_string())?;
    writer.flush()?;

    Ok(())
}

fn create_result(run: &SolverRun) -> ReportResult {
    let solution = &run.solution;

    ReportResult {
        algorithm: run.kind.to_string(),
        activities: solution
            .chosen
            .iter()
            .map(|activity| ReportActivity {
                name: activity.name.clone(),
                time: activity.time,
                cost: activity.cost,
                enjoyment: activity.enjoyment,
            })
            .collect(),
        total_enjoyment: solution.enjoyment,
        total_time: solution.time_used,
        total_cost: solution.chosen.iter().fold(0_usize, |acc, activity| acc.saturating_add(activity.cost)),
        execution_time: run.duration,
        is_complete: solution.is_complete,
    }
}
