//! Core crate contains the building blocks to plan an event: pick a subset of candidate activities
//! which maximizes total enjoyment while the total time stays within the event's time budget.
//!
//! # Solvers
//!
//! The problem is a variant of the ***0/1 knapsack*** problem where time is the capacity dimension
//! and enjoyment is the reward. Two exact solvers are provided:
//!
//! - [`ExhaustiveSearch`](solver::ExhaustiveSearch): a depth-first search over take/skip decisions
//!   which is bounded by a wall-clock quota. When the quota is reached, the best solution found so
//!   far is returned and marked as incomplete.
//! - [`DynamicProgramming`](solver::DynamicProgramming): a bottom-up tabulation over activity index
//!   and time used which always finds the optimum in `O(n * max_time)`.
//!
//! Both solvers produce the same [`Solution`](models::Solution) shape, so they can be checked
//! against each other.
//!
//! # Examples
//!
//! ```
//! use planner_core::prelude::*;
//! use std::sync::Arc;
//!
//! let event = Event::new(
//!     5,
//!     100,
//!     vec![
//!         Activity::new("A", 2, 10, 50),
//!         Activity::new("B", 3, 20, 80),
//!         Activity::new("C", 4, 30, 100),
//!     ],
//! );
//!
//! let solver = DynamicProgramming::new(Arc::new(Environment::silent()));
//! let solution = solver.solve(&event).unwrap();
//!
//! assert_eq!(solution.enjoyment, 130);
//! assert_eq!(solution.time_used, 5);
//! assert_eq!(solution.names(), vec!["A", "B"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/cross_validation_test.rs"]
mod cross_validation_test;

pub mod checker;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
