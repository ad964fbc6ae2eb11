//! Exhaustive enumeration.
//!
//! Visits all `2ⁿ` assignments and returns a global minimum. The cost is
//! exponential in `n`; callers are expected to bound the dimension
//! themselves (the experiment sweep only runs it up to
//! [`ExperimentConfig::exhaustive_limit`](crate::experiment::ExperimentConfig)).

mod runner;

pub use runner::ExhaustiveSolver;
