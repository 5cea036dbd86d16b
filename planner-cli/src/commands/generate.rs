#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;

use clap::Arg;
use planner_cli::extensions::generate::{GenerateSettings, generate_event};
use planner_cli::text::event::write_event;

const ACTIVITIES_ARG_NAME: &str = "activities";
const MAX_TIME_ARG_NAME: &str = "max-time";
const MAX_BUDGET_ARG_NAME: &str = "max-budget";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random event in the text format for testing")
        .arg(
            Arg::new(ACTIVITIES_ARG_NAME)
                .help("Amount of activities in generated event")
                .short('n')
                .long(ACTIVITIES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_TIME_ARG_NAME)
                .help("Available time of generated event")
                .short('t')
                .long(MAX_TIME_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MAX_BUDGET_ARG_NAME)
                .help("Available budget of generated event")
                .short('b')
                .long(MAX_BUDGET_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies randomization seed to get reproducible event")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs generate command.
pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let settings = get_settings(matches)?;
    let event = generate_event(&settings).map_err(|err| format!("cannot generate event: '{err}'"))?;

    let out_result =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;
    let out_buffer = create_write_buffer(out_result);

    write_event(&event, out_buffer).map_err(|err| format!("cannot write event: '{err}'"))
}

fn get_settings(matches: &ArgMatches) -> Result<GenerateSettings, String> {
    let get_required = |arg_name: &str, arg_desc: &str| -> Result<usize, String> {
        parse_number_arg::<usize>(matches, arg_name, arg_desc)?.ok_or_else(|| format!("{arg_desc} is not set"))
    };

    Ok(GenerateSettings {
        activities: get_required(ACTIVITIES_ARG_NAME, "activities")?,
        max_time: get_required(MAX_TIME_ARG_NAME, "max time")?,
        max_budget: get_required(MAX_BUDGET_ARG_NAME, "max budget")?,
        seed: parse_number_arg::<u64>(matches, SEED_ARG_NAME, "seed")?,
    })
}
