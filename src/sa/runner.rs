//! SA execution loop.

use super::config::{SaConfig, MIN_TEMPERATURE};
use crate::error::{IsingError, IsingResult};
use crate::model::{random_assignment, CoefficientMatrix, SolverResult};
use crate::DEFAULT_SEED;
use rand::Rng;
use tracing::debug;
use u_numflow::random::create_rng;

/// Best value is sampled into `cost_history` every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Best assignment ever visited and its value.
    pub solution: SolverResult,

    /// Total number of proposed flips.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted flips (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving flips.
    pub improving_moves: usize,

    /// Best value sampled at regular intervals. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes Simulated Annealing over single-flip moves.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, seeding the generator from `config.seed`.
    pub fn run(matrix: &CoefficientMatrix, config: &SaConfig) -> IsingResult<SaResult> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs SA drawing all randomness from `rng`.
    ///
    /// The best assignment is updated only by strictly improving flips.
    /// A flip with `delta >= 0` that passes the Metropolis test moves the
    /// current state but never the best one, even on an exact tie.
    pub fn run_with_rng<R: Rng>(
        matrix: &CoefficientMatrix,
        config: &SaConfig,
        rng: &mut R,
    ) -> IsingResult<SaResult> {
        config.validate().map_err(IsingError::InvalidConfig)?;

        let n = matrix.dimension();
        if n == 0 {
            return Ok(SaResult {
                solution: SolverResult {
                    assignment: Vec::new(),
                    value: 0.0,
                },
                iterations: 0,
                final_temperature: config.initial_temperature,
                accepted_moves: 0,
                improving_moves: 0,
                cost_history: vec![0.0],
            });
        }

        let mut current = random_assignment(n, rng);
        let mut current_value = matrix.evaluate(&current)?;
        let mut best = current.clone();
        let mut best_value = current_value;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = vec![best_value];

        for _ in 0..config.max_iterations {
            let index = rng.random_range(0..n);
            let neighbor_value = matrix.evaluate_flip(&mut current, index)?;
            let delta = neighbor_value - current_value;

            if delta < 0.0 {
                current[index] = current[index].flipped();
                current_value = neighbor_value;
                accepted_moves += 1;
                improving_moves += 1;

                if neighbor_value < best_value {
                    best.clone_from(&current);
                    best_value = neighbor_value;
                }
            } else {
                // Metropolis acceptance criterion
                let probability = (-delta / temperature).exp();
                if rng.random_range(0.0..1.0) < probability {
                    current[index] = current[index].flipped();
                    current_value = neighbor_value;
                    accepted_moves += 1;
                }
            }

            iterations += 1;
            if iterations % HISTORY_INTERVAL == 0 {
                cost_history.push(best_value);
            }

            temperature *= config.cooling_rate;
            if temperature < MIN_TEMPERATURE {
                break;
            }
        }

        if cost_history
            .last()
            .is_none_or(|&last| last != best_value)
        {
            cost_history.push(best_value);
        }

        debug!(
            n,
            value = best_value,
            iterations,
            accepted_moves,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            solution: SolverResult {
                assignment: best,
                value: best_value,
            },
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cost_history,
        })
    }
}
