//! Exact and heuristic solvers for unconstrained binary quadratic
//! minimization over ±1 variables.
//!
//! Given a real symmetric matrix `Q`, find `x ∈ {-1, +1}ⁿ` minimizing
//! `f(x) = Σᵢⱼ Q[i][j]·x[i]·x[j]`. All solvers score assignments through
//! the same evaluator, [`CoefficientMatrix::evaluate`](model::CoefficientMatrix::evaluate):
//!
//! - **Exhaustive**: enumerates all `2ⁿ` assignments; exact, small `n` only.
//! - **Greedy**: one deterministic left-to-right coordinate pass.
//! - **Local Search**: random start plus first-improvement single-flip descent.
//! - **Simulated Annealing (SA)**: random single flips with Metropolis
//!   acceptance and geometric cooling.
//! - **GRASP**: repeated semi-greedy randomized construction, each refined
//!   by the local search descent.
//!
//! The [`experiment`] module runs the solvers over a sweep of random
//! instances and writes a CSV report.
//!
//! # Reproducibility
//!
//! Every stochastic solver takes either a seed (through its config) or a
//! caller-supplied generator (`run_with_rng`); nothing draws from a
//! global source. Identical inputs and seed give identical results within
//! this crate. Bit-exact agreement with other implementations of the same
//! algorithms is not a goal, since the generator differs.

pub mod error;
pub mod exhaustive;
pub mod experiment;
pub mod grasp;
pub mod greedy;
pub mod local_search;
pub mod model;
pub mod sa;

pub use error::{IsingError, IsingResult};

/// Seed used by runners whose config leaves `seed` unset.
pub(crate) const DEFAULT_SEED: u64 = 42;
