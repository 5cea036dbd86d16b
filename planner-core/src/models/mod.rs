//! A collection of models to represent the event planning problem and its solution.

mod event;
pub use self::event::*;

mod solution;
pub use self::solution::*;
