//! GRASP execution loop.
//!
//! # Algorithm
//!
//! 1. Construct one assignment and take it, unrefined, as the incumbent
//! 2. Repeat `max_iterations` times:
//!    a. Construct a fresh assignment
//!    b. Refine it with single-flip descent
//!    c. Replace the incumbent if strictly better
//!
//! A single generator is threaded through every construction of a run.

use super::config::GraspConfig;
use super::construction::construct;
use crate::error::{IsingError, IsingResult};
use crate::local_search::descend;
use crate::model::{CoefficientMatrix, SolverResult};
use crate::DEFAULT_SEED;
use rand::Rng;
use tracing::debug;
use u_numflow::random::create_rng;

/// Result of a GRASP run.
#[derive(Debug, Clone)]
pub struct GraspResult {
    /// Best assignment found and its value.
    pub solution: SolverResult,
    /// Number of construct-and-refine rounds executed.
    pub iterations: usize,
    /// Round that produced the returned solution, or `None` if the
    /// unrefined seed construction was never beaten.
    pub best_iteration: Option<usize>,
    /// Incumbent value after the seed and after each round.
    pub cost_history: Vec<f64>,
}

/// GRASP runner.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP, seeding the generator from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_ising::grasp::{GraspConfig, GraspRunner};
    /// use u_ising::model::generate_symmetric;
    ///
    /// let q = generate_symmetric(10, 1000);
    /// let config = GraspConfig::default().with_max_iterations(10).with_seed(1000);
    /// let result = GraspRunner::run(&q, &config).unwrap();
    /// assert_eq!(result.solution.assignment.len(), 10);
    /// ```
    pub fn run(matrix: &CoefficientMatrix, config: &GraspConfig) -> IsingResult<GraspResult> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs GRASP drawing all randomness from `rng`.
    pub fn run_with_rng<R: Rng>(
        matrix: &CoefficientMatrix,
        config: &GraspConfig,
        rng: &mut R,
    ) -> IsingResult<GraspResult> {
        config.validate().map_err(IsingError::InvalidConfig)?;

        let seed = construct(matrix, config.alpha, rng)?;
        let mut best = SolverResult::evaluated(matrix, seed)?;
        let mut best_iteration = None;

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(best.value);

        for iteration in 0..config.max_iterations {
            let constructed = construct(matrix, config.alpha, rng)?;
            let refined = descend(matrix, constructed, config.local_search_iterations)?;

            if refined.solution.value < best.value {
                best = refined.solution;
                best_iteration = Some(iteration);
            }

            cost_history.push(best.value);
        }

        debug!(
            n = matrix.dimension(),
            value = best.value,
            iterations = config.max_iterations,
            ?best_iteration,
            "grasp finished"
        );

        Ok(GraspResult {
            solution: best,
            iterations: config.max_iterations,
            best_iteration,
            cost_history,
        })
    }
}
