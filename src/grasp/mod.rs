//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Each round builds an assignment with a semi-greedy randomized
//! construction and refines it with the single-flip [`descend`]
//! procedure from [`local_search`](crate::local_search). The best refined
//! assignment over all rounds is returned.
//!
//! One extra construction is scored before the first round to seed the
//! incumbent. That seed is *not* refined, unlike every in-loop candidate;
//! this asymmetry is kept on purpose and is visible through
//! [`GraspResult::best_iteration`] being `None` when the seed survives.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995), "Greedy Randomized Adaptive
//!   Search Procedures", *Journal of Global Optimization* 6, 109-133.
//!
//! [`descend`]: crate::local_search::descend

mod config;
mod construction;
mod runner;

pub use config::GraspConfig;
pub use construction::{construct, Candidate};
pub use runner::{GraspResult, GraspRunner};
