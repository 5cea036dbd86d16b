pub mod generate;
pub mod solve;

use clap::{ArgMatches, Command};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write, stdout};
use std::str::FromStr;

/// Creates the application with all subcommands.
pub fn get_app() -> Command {
    Command::new("Event Planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to select event activities within a time budget")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(solve::get_solve_app())
        .subcommand(generate::get_generate_app())
}

/// Wraps the result file, or stdout when no file is given, into a buffered writer.
pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    let writer: Box<dyn Write> = match out_file {
        Some(out_file) => Box::new(out_file),
        None => Box::new(stdout()),
    };

    BufWriter::new(writer)
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => format!("file not found: cannot find {description} file '{path}'"),
        _ => format!("cannot open {description} file '{path}': '{err}'"),
    })
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

/// Parses an optional numeric argument, returns `None` when the argument is absent.
fn parse_number_arg<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(arg) = matches.get_one::<String>(arg_name) else { return Ok(None) };

    arg.trim().parse::<T>().map(Some).map_err(|err| format!("invalid {arg_desc} '{arg}': {err}"))
}
