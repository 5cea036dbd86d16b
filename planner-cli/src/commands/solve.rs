#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction};
use planner_cli::core::checker::check_solution;
use planner_cli::core::models::Event;
use planner_cli::extensions::solve::config::create_settings_from_config_file;
use planner_cli::extensions::solve::{SolveSettings, parse_algorithms, solve_event};
use planner_cli::text::event::EventProblem;
use planner_cli::text::report::{ReportContext, SolverRun, write_json_report, write_text_report};
use std::io::BufReader;

const EVENT_ARG_NAME: &str = "EVENT";
const ALGORITHM_ARG_NAME: &str = "algorithm";
const TIME_ARG_NAME: &str = "max-time";
const CELLS_ARG_NAME: &str = "max-cells";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_FORMAT_ARG_NAME: &str = "out-format";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Selects activities which maximize enjoyment within the event time")
        .arg(Arg::new(EVENT_ARG_NAME).help("Sets the event file to use").required(true).index(1))
        .arg(
            Arg::new(ALGORITHM_ARG_NAME)
                .help("Specifies solver to run, `all` runs every solver one after another")
                .short('a')
                .long(ALGORITHM_ARG_NAME)
                .required(false)
                .value_parser(["exhaustive", "bruteforce", "dynamic", "bottom-up", "all"]),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of exhaustive search in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CELLS_ARG_NAME)
                .help("Specifies max amount of dynamic programming table cells")
                .long(CELLS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to solver configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies result output format")
                .short('f')
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Specifies whether solutions should be checked for feasibility")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Runs solve command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let event_path = matches.get_one::<String>(EVENT_ARG_NAME).ok_or_else(|| "event file is not set".to_string())?;

    let settings = get_settings(matches)?;
    let event = read_event(event_path)?;

    let runs = solve_event(&event, &settings).map_err(|err| format!("cannot solve event: '{err}'"))?;

    if matches.get_flag(CHECK_ARG_NAME) {
        check_runs(&event, runs.as_slice())?;
    }

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let out_buffer = out_writer_func(out_result);
    let report_ctx = ReportContext { input: event_path, event: &event, runs: runs.as_slice() };

    match matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map(String::as_str) {
        Some("json") => write_json_report(&report_ctx, out_buffer),
        _ => write_text_report(&report_ctx, out_buffer),
    }
    .map_err(|err| format!("cannot write result: '{err}'"))
}

fn read_event(event_path: &str) -> Result<Event, String> {
    let event_file = open_file(event_path, "event")?;

    BufReader::new(event_file).read_event().map_err(|err| format!("invalid input in '{event_path}': {err}"))
}

/// Creates settings from defaults, optional config file and command line arguments, latter win.
fn get_settings(matches: &ArgMatches) -> Result<SolveSettings, String> {
    let mut settings = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(config_path) => create_settings_from_config_file(BufReader::new(open_file(config_path, "config")?))
            .map_err(|err| format!("cannot read config: '{err}'"))?,
        None => SolveSettings::default(),
    };

    if let Some(algorithm) = matches.get_one::<String>(ALGORITHM_ARG_NAME) {
        settings.algorithms = parse_algorithms(algorithm).map_err(|err| err.to_string())?;
    }

    if let Some(time_limit) = parse_number_arg::<f64>(matches, TIME_ARG_NAME, "max time")? {
        settings.time_limit = time_limit;
    }

    if let Some(max_cells) = parse_number_arg::<usize>(matches, CELLS_ARG_NAME, "max cells")? {
        settings.max_cells = max_cells;
    }

    settings.is_logging_enabled |= matches.get_flag(LOG_ARG_NAME);

    Ok(settings)
}

fn check_runs(event: &Event, runs: &[SolverRun]) -> Result<(), String> {
    let errors = runs
        .iter()
        .filter_map(|run| check_solution(event, &run.solution).err().map(|errs| (run.kind, errs)))
        .flat_map(|(kind, errs)| errs.into_iter().map(move |err| format!("{kind}: {err}")))
        .collect::<Vec<_>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("checker found {} errors:\n{}", errors.len(), errors.join("\n")))
    }
}
