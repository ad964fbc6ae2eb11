//! Local search execution.
//!
//! # Algorithm
//!
//! 1. Draw each spin independently (fair coin)
//! 2. Sweep `i = 0..n`: evaluate the assignment with spin `i` flipped
//!    against the *current* assignment; if strictly lower, keep the flip
//!    immediately and continue with `i + 1`
//! 3. Stop after a sweep with no kept flip, or after `max_iterations` sweeps

use super::config::LocalSearchConfig;
use crate::error::IsingResult;
use crate::model::{random_assignment, CoefficientMatrix, SolverResult, Spin};
use crate::DEFAULT_SEED;
use rand::Rng;
use tracing::{debug, trace};
use u_numflow::random::create_rng;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// Final assignment and its value.
    pub solution: SolverResult,
    /// Number of sweeps performed.
    pub sweeps: usize,
    /// Number of flips kept across all sweeps.
    pub accepted_moves: usize,
    /// `true` if the last sweep kept no flip, i.e. the assignment is a
    /// local optimum. `false` means the sweep cap stopped the descent.
    pub converged: bool,
}

/// Executes single-flip local search from a random start.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search, seeding the generator from `config.seed`.
    pub fn run(
        matrix: &CoefficientMatrix,
        config: &LocalSearchConfig,
    ) -> IsingResult<LocalSearchResult> {
        let mut rng = create_rng(config.seed.unwrap_or(DEFAULT_SEED));
        Self::run_with_rng(matrix, config, &mut rng)
    }

    /// Runs local search drawing the starting assignment from `rng`.
    pub fn run_with_rng<R: Rng>(
        matrix: &CoefficientMatrix,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> IsingResult<LocalSearchResult> {
        let initial = random_assignment(matrix.dimension(), rng);
        let result = descend(matrix, initial, config.max_iterations)?;
        debug!(
            n = matrix.dimension(),
            value = result.solution.value,
            sweeps = result.sweeps,
            converged = result.converged,
            "local search finished"
        );
        Ok(result)
    }
}

/// First-improvement single-flip descent from `initial`.
///
/// Equal-valued flips are never taken. At most `max_sweeps` sweeps are
/// performed; with `max_sweeps == 0` the initial assignment is returned
/// unchanged and reported as not converged.
pub fn descend(
    matrix: &CoefficientMatrix,
    initial: Vec<Spin>,
    max_sweeps: usize,
) -> IsingResult<LocalSearchResult> {
    let mut current = initial;
    let mut current_value = matrix.evaluate(&current)?;

    let mut improved = true;
    let mut sweeps = 0;
    let mut accepted_moves = 0;

    while improved && sweeps < max_sweeps {
        improved = false;

        for i in 0..current.len() {
            let neighbor_value = matrix.evaluate_flip(&mut current, i)?;
            if neighbor_value < current_value {
                current[i] = current[i].flipped();
                current_value = neighbor_value;
                accepted_moves += 1;
                improved = true;
                trace!(sweep = sweeps, index = i, value = current_value, "flip accepted");
            }
        }

        sweeps += 1;
    }

    Ok(LocalSearchResult {
        solution: SolverResult {
            assignment: current,
            value: current_value,
        },
        sweeps,
        accepted_moves,
        converged: !improved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveSolver;
    use crate::model::generate_symmetric;
    use Spin::{Down, Up};

    fn is_local_optimum(q: &CoefficientMatrix, x: &[Spin]) -> bool {
        let value = q.evaluate(x).unwrap();
        let mut flipped = x.to_vec();
        (0..x.len()).all(|i| q.evaluate_flip(&mut flipped, i).unwrap() >= value)
    }

    #[test]
    fn test_returns_local_optimum() {
        for seed in 0..10 {
            let q = generate_symmetric(15, 1500 + seed);
            let config = LocalSearchConfig::default().with_seed(seed);
            let r = LocalSearchRunner::run(&q, &config).unwrap();
            assert!(r.converged);
            assert!(is_local_optimum(&q, &r.solution.assignment));
        }
    }

    #[test]
    fn test_value_is_exact() {
        let q = generate_symmetric(10, 77);
        let r = LocalSearchRunner::run(&q, &LocalSearchConfig::default().with_seed(77)).unwrap();
        assert_eq!(r.solution.value, q.evaluate(&r.solution.assignment).unwrap());
    }

    #[test]
    fn test_reproducible() {
        let q = generate_symmetric(20, 2000);
        let config = LocalSearchConfig::default().with_seed(2000);
        let a = LocalSearchRunner::run(&q, &config).unwrap();
        let b = LocalSearchRunner::run(&q, &config).unwrap();
        assert_eq!(a.solution, b.solution);
        assert_eq!(a.sweeps, b.sweeps);
    }

    #[test]
    fn test_not_better_than_exhaustive() {
        let q = generate_symmetric(9, 900);
        let exact = ExhaustiveSolver::solve(&q).unwrap();
        let r = LocalSearchRunner::run(&q, &LocalSearchConfig::default().with_seed(9)).unwrap();
        assert!(exact.value <= r.solution.value);
    }

    #[test]
    fn test_descend_immediate_acceptance() {
        // Q = [[0,1],[1,0]] from (+1,+1): flipping 0 gives -2 and is kept,
        // then flipping 1 of (-1,+1) gives +2 and is rejected.
        let q = CoefficientMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let r = descend(&q, vec![Up, Up], 1000).unwrap();
        assert_eq!(r.solution.assignment, vec![Down, Up]);
        assert_eq!(r.solution.value, -2.0);
        assert_eq!(r.accepted_moves, 1);
        assert_eq!(r.sweeps, 2);
        assert!(r.converged);
    }

    #[test]
    fn test_descend_zero_sweeps() {
        let q = generate_symmetric(4, 4);
        let start = vec![Up, Down, Up, Down];
        let r = descend(&q, start.clone(), 0).unwrap();
        assert_eq!(r.solution.assignment, start);
        assert_eq!(r.sweeps, 0);
        assert!(!r.converged);
    }

    #[test]
    fn test_descend_sweep_cap() {
        let q = generate_symmetric(30, 3000);
        let r = descend(&q, vec![Up; 30], 1).unwrap();
        assert_eq!(r.sweeps, 1);
        assert!(!r.converged);
        assert!(r.accepted_moves > 0);
    }

    #[test]
    fn test_descend_plateau_not_walked() {
        let q = CoefficientMatrix::zeros(3);
        let r = descend(&q, vec![Up, Down, Up], 10).unwrap();
        assert_eq!(r.accepted_moves, 0);
        assert_eq!(r.sweeps, 1);
        assert!(r.converged);
    }

    #[test]
    fn test_empty_matrix() {
        let q = CoefficientMatrix::zeros(0);
        let r = LocalSearchRunner::run(&q, &LocalSearchConfig::default()).unwrap();
        assert!(r.solution.assignment.is_empty());
        assert_eq!(r.solution.value, 0.0);
        assert!(r.converged);
    }

    #[test]
    fn test_descend_dimension_mismatch() {
        let q = CoefficientMatrix::zeros(3);
        assert!(descend(&q, vec![Up], 10).is_err());
    }
}
