//! Text crate contains logic to read events from a plain text format and to write planning
//! reports.
//!
//! # Event format
//!
//! ```text
//! <activity count>
//! <max time> <max budget>
//! <name> <time> <cost> <enjoyment>
//! ...
//! ```
//!
//! Lines are trimmed, fields are separated by whitespace. Lines after the declared amount of
//! activities are ignored.
//!
//! # Examples
//!
//! ```
//! use planner_text::event::EventProblem;
//!
//! let event = "2\n5 100\nA 2 10 50\nB 3 20 80\n".to_string().read_event().unwrap();
//!
//! assert_eq!(event.max_time, 5);
//! assert_eq!(event.max_budget, 100);
//! assert_eq!(event.size(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use planner_core as core;

pub mod common;
pub mod event;
pub mod report;
