//! Single-flip local search.
//!
//! Starts from a uniformly random assignment and sweeps the indices in
//! order, flipping any variable whose flip strictly lowers the objective
//! the moment it is found. Sweeps repeat until one completes without a
//! flip (a local optimum of the single-flip neighborhood) or the sweep
//! cap is reached.
//!
//! The descent itself, [`descend`], is shared with [`grasp`](crate::grasp)
//! as its refinement step.

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{descend, LocalSearchResult, LocalSearchRunner};
