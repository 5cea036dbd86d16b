//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use super::{SolveSettings, parse_algorithms};
use planner_core::utils::{GenericError, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A solver configuration.
#[derive(Clone, Default, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies solvers to run: `exhaustive`, `dynamic` or `all`.
    pub algorithms: Option<Vec<String>>,
    /// Specifies exhaustive search configuration.
    pub exhaustive: Option<ExhaustiveConfig>,
    /// Specifies dynamic programming configuration.
    pub dynamic: Option<DynamicConfig>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// An exhaustive search configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExhaustiveConfig {
    /// A time limit in seconds.
    pub time_limit: Option<f64>,
}

/// A dynamic programming configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DynamicConfig {
    /// A maximum amount of table cells.
    pub max_cells: Option<usize>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates solve settings from config, unspecified values are taken from defaults.
pub fn create_settings_from_config(config: &Config) -> GenericResult<SolveSettings> {
    let defaults = SolveSettings::default();

    let algorithms = match &config.algorithms {
        Some(algorithms) if algorithms.is_empty() => return Err("config has empty algorithms list".into()),
        Some(algorithms) => {
            let mut kinds = Vec::new();
            for value in algorithms.iter() {
                for kind in parse_algorithms(value.as_str())? {
                    if !kinds.contains(&kind) {
                        kinds.push(kind);
                    }
                }
            }
            kinds
        }
        None => defaults.algorithms,
    };

    Ok(SolveSettings {
        algorithms,
        time_limit: config.exhaustive.as_ref().and_then(|config| config.time_limit).unwrap_or(defaults.time_limit),
        max_cells: config.dynamic.as_ref().and_then(|config| config.max_cells).unwrap_or(defaults.max_cells),
        is_logging_enabled: config.logging.as_ref().is_some_and(|config| config.enabled),
    })
}

/// Reads config and creates solve settings from it.
pub fn create_settings_from_config_file<R: Read>(reader: BufReader<R>) -> Result<SolveSettings, GenericError> {
    read_config(reader).and_then(|config| create_settings_from_config(&config))
}
