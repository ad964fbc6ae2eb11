//! Greedy pass.

use crate::error::IsingResult;
use crate::model::{CoefficientMatrix, SolverResult, Spin};
use tracing::debug;

/// Deterministic single-pass greedy solver.
pub struct GreedySolver;

impl GreedySolver {
    /// Runs the greedy pass over indices `0..n`.
    ///
    /// Index `i` becomes `+1` only if that is strictly better than `-1`;
    /// an exact tie leaves it at `-1`. O(n) evaluations of O(n²) each.
    pub fn solve(matrix: &CoefficientMatrix) -> IsingResult<SolverResult> {
        let n = matrix.dimension();
        let mut assignment = vec![Spin::Up; n];

        for i in 0..n {
            assignment[i] = Spin::Up;
            let value_up = matrix.evaluate(&assignment)?;
            assignment[i] = Spin::Down;
            let value_down = matrix.evaluate(&assignment)?;

            assignment[i] = if value_up < value_down {
                Spin::Up
            } else {
                Spin::Down
            };
        }

        let result = SolverResult::evaluated(matrix, assignment)?;
        debug!(n, value = result.value, "greedy pass finished");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exhaustive::ExhaustiveSolver;
    use crate::model::generate_symmetric;
    use Spin::{Down, Up};

    #[test]
    fn test_pair_regression() {
        // i = 0: (+1,+1) -> 2, (-1,+1) -> -2, take -1.
        // i = 1: (-1,+1) -> -2, (-1,-1) -> 2, take +1.
        let q = CoefficientMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let r = GreedySolver::solve(&q).unwrap();
        assert_eq!(r.assignment, vec![Down, Up]);
        assert_eq!(r.value, -2.0);
    }

    #[test]
    fn test_tie_picks_down() {
        let q = CoefficientMatrix::new(vec![vec![5.0]]).unwrap();
        let r = GreedySolver::solve(&q).unwrap();
        assert_eq!(r.assignment, vec![Down]);
        assert_eq!(r.value, 5.0);
    }

    #[test]
    fn test_empty() {
        let r = GreedySolver::solve(&CoefficientMatrix::zeros(0)).unwrap();
        assert!(r.assignment.is_empty());
        assert_eq!(r.value, 0.0);
    }

    #[test]
    fn test_deterministic() {
        let q = generate_symmetric(12, 1203);
        assert_eq!(GreedySolver::solve(&q).unwrap(), GreedySolver::solve(&q).unwrap());
    }

    #[test]
    fn test_not_better_than_exhaustive() {
        for seed in 0..5 {
            let q = generate_symmetric(8, seed);
            let exact = ExhaustiveSolver::solve(&q).unwrap();
            let greedy = GreedySolver::solve(&q).unwrap();
            assert!(exact.value <= greedy.value);
            assert_eq!(greedy.value, q.evaluate(&greedy.assignment).unwrap());
        }
    }
}
