//! Semi-greedy randomized construction.
//!
//! Variables are fixed one at a time. While some remain unassigned, each
//! unassigned variable is scored by the better of its two signs, with
//! every other unassigned variable left out of the sum. A variable is
//! drawn uniformly from the best-scoring prefix (the restricted candidate
//! list) and fixed to its better sign.

use crate::error::IsingResult;
use crate::model::{CoefficientMatrix, Spin};
use rand::Rng;

/// An unassigned variable ranked during construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Variable index.
    pub index: usize,
    /// `min(f(+1), f(-1))` over the current partial assignment.
    pub score: f64,
    /// The sign achieving `score`. `Up` only when strictly better.
    pub spin: Spin,
}

impl Candidate {
    /// Scores `index` against `partial`, which must have `partial[index]`
    /// unassigned. `partial` is restored before returning.
    pub fn score(
        matrix: &CoefficientMatrix,
        partial: &mut [Option<Spin>],
        index: usize,
    ) -> IsingResult<Self> {
        partial[index] = Some(Spin::Up);
        let value_up = matrix.evaluate_partial(partial);
        partial[index] = Some(Spin::Down);
        let value_down = matrix.evaluate_partial(partial);
        partial[index] = None;

        let (value_up, value_down) = (value_up?, value_down?);
        let candidate = if value_up < value_down {
            Candidate {
                index,
                score: value_up,
                spin: Spin::Up,
            }
        } else {
            Candidate {
                index,
                score: value_down,
                spin: Spin::Down,
            }
        };
        Ok(candidate)
    }
}

/// Builds one complete assignment.
///
/// Candidates are ordered by ascending score with a stable sort, so equal
/// scores keep increasing index order. `alpha` is expected in `[0, 1]`.
pub fn construct<R: Rng>(
    matrix: &CoefficientMatrix,
    alpha: f64,
    rng: &mut R,
) -> IsingResult<Vec<Spin>> {
    construct_ordered(matrix, alpha, rng).map(|(assignment, _)| assignment)
}

/// Number of best-scoring candidates eligible for selection:
/// `max(1, floor(alpha * len))`.
fn restricted_size(alpha: f64, len: usize) -> usize {
    ((alpha * len as f64) as usize).max(1)
}

/// Builds one assignment, also returning the indices in the order they
/// were fixed.
fn construct_ordered<R: Rng>(
    matrix: &CoefficientMatrix,
    alpha: f64,
    rng: &mut R,
) -> IsingResult<(Vec<Spin>, Vec<usize>)> {
    let n = matrix.dimension();
    let mut partial: Vec<Option<Spin>> = vec![None; n];
    let mut unassigned: Vec<usize> = (0..n).collect();
    let mut candidates: Vec<Candidate> = Vec::with_capacity(n);
    let mut order = Vec::with_capacity(n);

    while !unassigned.is_empty() {
        candidates.clear();
        for &index in &unassigned {
            candidates.push(Candidate::score(matrix, &mut partial, index)?);
        }
        candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

        let rcl_size = restricted_size(alpha, candidates.len());
        let chosen = candidates[rng.random_range(0..rcl_size)];

        partial[chosen.index] = Some(chosen.spin);
        unassigned.retain(|&i| i != chosen.index);
        order.push(chosen.index);
    }

    // Every index has been fixed by the loop above.
    let assignment = partial
        .into_iter()
        .map(|spin| spin.unwrap_or(Spin::Up))
        .collect();
    Ok((assignment, order))
}
