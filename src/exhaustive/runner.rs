//! Enumeration loop.
//!
//! # Order
//!
//! Assignments are visited in the order of a depth-first recursion over
//! indices `0..n` that tries `+1` before `-1` at every level. Encoding
//! that recursion as a counter `k` in `0..2ⁿ`, index `i` is `-1` exactly
//! when bit `n - 1 - i` of `k` is set: index 0 is the most significant
//! digit and `+1` is the `0` digit. The incumbent is replaced only on a
//! strictly smaller value, so among equal optima the first one visited
//! is returned.

use crate::error::{IsingError, IsingResult};
use crate::model::{CoefficientMatrix, SolverResult, Spin};
use tracing::debug;

/// Brute-force solver. Guaranteed optimal.
pub struct ExhaustiveSolver;

impl ExhaustiveSolver {
    /// Largest dimension whose assignment space fits the enumeration
    /// counter.
    pub const MAX_DIMENSION: usize = 63;

    /// Returns the first minimum-value assignment in enumeration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_ising::exhaustive::ExhaustiveSolver;
    /// use u_ising::model::{CoefficientMatrix, Spin};
    ///
    /// let q = CoefficientMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
    /// let result = ExhaustiveSolver::solve(&q).unwrap();
    /// assert_eq!(result.assignment, vec![Spin::Up, Spin::Down]);
    /// assert_eq!(result.value, -2.0);
    /// ```
    pub fn solve(matrix: &CoefficientMatrix) -> IsingResult<SolverResult> {
        let n = matrix.dimension();
        if n > Self::MAX_DIMENSION {
            return Err(IsingError::DimensionTooLarge {
                dimension: n,
                max: Self::MAX_DIMENSION,
            });
        }

        let total: u64 = 1 << n;
        let mut current = vec![Spin::Up; n];
        let mut best: Option<SolverResult> = None;

        for k in 0..total {
            for (i, spin) in current.iter_mut().enumerate() {
                *spin = if (k >> (n - 1 - i)) & 1 == 1 {
                    Spin::Down
                } else {
                    Spin::Up
                };
            }

            let value = matrix.evaluate(&current)?;
            let improves = best.as_ref().is_none_or(|b| value < b.value);
            if improves {
                best = Some(SolverResult {
                    assignment: current.clone(),
                    value,
                });
            }
        }

        // `total >= 1`, so the loop ran at least once.
        let best = best.unwrap_or(SolverResult {
            assignment: current,
            value: 0.0,
        });
        debug!(n, total, value = best.value, "exhaustive search finished");
        Ok(best)
    }
}
