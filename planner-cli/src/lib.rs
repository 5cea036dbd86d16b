//! A crate with extensions used by the event planner command line interface.
//!
//! # Examples
//!
//! ```
//! use planner_cli::core::solver::SolverKind;
//! use planner_cli::extensions::solve::{SolveSettings, solve_event};
//! use planner_cli::text::event::EventProblem;
//!
//! let event = "3\n5 100\nA 2 10 50\nB 3 20 80\nC 4 30 100\n".to_string().read_event().unwrap();
//! let settings = SolveSettings { algorithms: SolverKind::all().to_vec(), ..SolveSettings::default() };
//!
//! let runs = solve_event(&event, &settings).unwrap();
//!
//! assert_eq!(runs.len(), 2);
//! assert!(runs.iter().all(|run| run.solution.enjoyment == 130));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use planner_core as core;
pub use planner_text as text;

pub mod extensions;
