//! Solver output.

use super::matrix::CoefficientMatrix;
use super::spin::Spin;
use crate::error::IsingResult;

/// An assignment paired with its objective value.
///
/// `value` is always the result of evaluating `assignment` against the
/// matrix the solver ran on, never a cached running total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// One spin per variable, in matrix index order.
    pub assignment: Vec<Spin>,
    /// Objective value of `assignment`.
    pub value: f64,
}

impl SolverResult {
    /// Evaluates `assignment` and pairs it with its value.
    pub fn evaluated(matrix: &CoefficientMatrix, assignment: Vec<Spin>) -> IsingResult<Self> {
        let value = matrix.evaluate(&assignment)?;
        Ok(Self { assignment, value })
    }

    /// Number of variables.
    pub fn dimension(&self) -> usize {
        self.assignment.len()
    }

    /// The assignment as `1` / `-1` integers.
    pub fn signs(&self) -> Vec<i8> {
        self.assignment.iter().map(|&s| s.sign()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluated() {
        let q = CoefficientMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        let r = SolverResult::evaluated(&q, vec![Spin::Down, Spin::Up]).unwrap();
        assert_eq!(r.value, -2.0);
        assert_eq!(r.signs(), vec![-1, 1]);
        assert_eq!(r.dimension(), 2);
    }

    #[test]
    fn test_evaluated_mismatch() {
        let q = CoefficientMatrix::zeros(3);
        assert!(SolverResult::evaluated(&q, vec![Spin::Up]).is_err());
    }
}
