//! Contains solvers which select activities for an event.
//!
//! Both solvers implement the same [`Solver`] contract:
//!
//! - total time of chosen activities never exceeds `max_time`;
//! - reported enjoyment and time used are sums over chosen activities;
//! - chosen activities are references to the event's activities without duplicates;
//! - the event is never mutated.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod dynamic;
pub use self::dynamic::*;

mod exhaustive;
pub use self::exhaustive::*;

use crate::models::{Event, Solution};
use crate::utils::{GenericError, GenericResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Selects activities for the event.
pub trait Solver {
    /// Solves the problem defined by the event. An error is returned only when solver's
    /// preconditions are violated.
    fn solve(&self, event: &Event) -> GenericResult<Solution>;
}

/// Checks that totals of any selection are representable, so neither solver can overflow.
pub(crate) fn validate_event(event: &Event) -> GenericResult<()> {
    if event.total_enjoyment().is_none() {
        return Err(format!("total enjoyment of {} activities exceeds '{}'", event.size(), usize::MAX).into());
    }

    Ok(())
}

/// Specifies a solver strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// Depth-first search over take/skip decisions, see [`ExhaustiveSearch`].
    Exhaustive,
    /// Bottom-up tabulation, see [`DynamicProgramming`].
    Dynamic,
}

impl SolverKind {
    /// Returns all supported solver kinds.
    pub fn all() -> &'static [SolverKind] {
        &[SolverKind::Exhaustive, SolverKind::Dynamic]
    }

    /// Returns a canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            SolverKind::Exhaustive => "exhaustive",
            SolverKind::Dynamic => "dynamic",
        }
    }
}

impl Display for SolverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SolverKind {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exhaustive" | "bruteforce" => Ok(SolverKind::Exhaustive),
            "dynamic" | "bottom-up" => Ok(SolverKind::Dynamic),
            _ => Err(format!("unknown solver kind: '{value}'").into()),
        }
    }
}
