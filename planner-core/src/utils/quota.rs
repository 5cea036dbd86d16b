//! Specifies a computational quota for solvers.

#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::{GenericResult, Timer};

/// Specifies a computational quota for solving the problem.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as timer, etc. The quota is polled by the solver, it is never preemptive.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A wall-clock time quota which is reached when the limit has elapsed since its creation.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota` starting the clock immediately.
    /// The limit must be a positive finite number of seconds.
    pub fn new(limit_in_secs: f64) -> GenericResult<Self> {
        if !limit_in_secs.is_finite() || limit_in_secs <= 0. {
            return Err(format!("time limit must be a positive number of seconds, got: '{limit_in_secs}'").into());
        }

        Ok(Self { start: Timer::start(), limit_in_secs })
    }

    /// Returns the limit in seconds.
    pub fn limit_in_secs(&self) -> f64 {
        self.limit_in_secs
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() >= self.limit_in_secs
    }
}

/// A quota which is never reached.
#[derive(Default)]
pub struct NoQuota;

impl Quota for NoQuota {
    fn is_reached(&self) -> bool {
        false
    }
}
