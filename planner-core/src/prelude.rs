//! Reimports commonly used types.

pub use crate::models::Activity;
pub use crate::models::Event;
pub use crate::models::Solution;

pub use crate::solver::DynamicProgramming;
pub use crate::solver::ExhaustiveSearch;
pub use crate::solver::Solver;
pub use crate::solver::SolverKind;

pub use crate::checker::check_solution;

pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
