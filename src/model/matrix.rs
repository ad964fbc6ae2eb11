//! Coefficient matrix and the quadratic-form evaluator.
//!
//! Every solver in this crate scores assignments through
//! [`CoefficientMatrix::evaluate`]. It always performs the full
//! `Σᵢⱼ Q[i][j]·x[i]·x[j]` double sum; there is no incremental delta
//! evaluation, so each call costs O(n²).

use super::spin::Spin;
use crate::error::{IsingError, IsingResult};
use rand::Rng;
use u_numflow::random::create_rng;

/// A dense `n × n` matrix of real coefficients, stored row-major.
///
/// Symmetry (`Q[i][j] == Q[j][i]`) is assumed by every solver but is not
/// checked on construction. Use [`is_symmetric`](Self::is_symmetric) to
/// verify it when the source of the matrix is untrusted. NaN or infinite
/// entries are accepted and propagate through the arithmetic.
///
/// # Examples
///
/// ```
/// use u_ising::model::{CoefficientMatrix, Spin};
///
/// let q = CoefficientMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// assert_eq!(q.evaluate(&[Spin::Up, Spin::Down]).unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoefficientMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CoefficientMatrix {
    /// Builds a matrix from its rows.
    ///
    /// Fails with [`IsingError::NotSquare`] if any row length differs from
    /// the number of rows.
    pub fn new(rows: Vec<Vec<f64>>) -> IsingResult<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(IsingError::NotSquare {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            data.extend(values);
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix from `n * n` row-major values.
    pub fn from_flat(n: usize, data: Vec<f64>) -> IsingResult<Self> {
        if data.len() != n * n {
            return Err(IsingError::BadLength {
                expected: n * n,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Builds a matrix by calling `f(i, j)` for every entry.
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(n: usize, mut f: F) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { n, data }
    }

    /// The all-zero matrix of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of variables.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// `Q[i][j]`. Panics if either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        self.data[i * self.n + j]
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Returns `true` if `|Q[i][j] - Q[j][i]| <= tolerance` for all pairs.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| {
            (i + 1..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }

    /// Computes `Σᵢⱼ Q[i][j]·x[i]·x[j]`.
    ///
    /// Fails with [`IsingError::DimensionMismatch`] if the assignment
    /// length differs from the matrix dimension. An empty matrix with an
    /// empty assignment evaluates to `0.0`.
    pub fn evaluate(&self, assignment: &[Spin]) -> IsingResult<f64> {
        self.check_len(assignment.len())?;
        Ok(self.form(|i| assignment[i].value()))
    }

    /// Like [`evaluate`](Self::evaluate), but `None` entries contribute `0`
    /// to the sum, as if the variable were absent.
    pub fn evaluate_partial(&self, assignment: &[Option<Spin>]) -> IsingResult<f64> {
        self.check_len(assignment.len())?;
        Ok(self.form(|i| assignment[i].map_or(0.0, Spin::value)))
    }

    /// Evaluates `assignment` with spin `index` negated.
    ///
    /// The assignment is flipped in place for the evaluation and restored
    /// before returning, so on return it is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn evaluate_flip(&self, assignment: &mut [Spin], index: usize) -> IsingResult<f64> {
        self.check_len(assignment.len())?;
        assignment[index] = assignment[index].flipped();
        let value = self.form(|i| assignment[i].value());
        assignment[index] = assignment[index].flipped();
        Ok(value)
    }

    fn check_len(&self, len: usize) -> IsingResult<()> {
        if len != self.n {
            return Err(IsingError::DimensionMismatch {
                expected: self.n,
                actual: len,
            });
        }
        Ok(())
    }

    /// Row-major double sum over `Q[i][j] * x(i) * x(j)`.
    fn form<F: Fn(usize) -> f64>(&self, x: F) -> f64 {
        let mut total = 0.0;
        for i in 0..self.n {
            let xi = x(i);
            for (j, &q) in self.row(i).iter().enumerate() {
                total += q * xi * x(j);
            }
        }
        total
    }
}

/// Generates a random symmetric instance of dimension `n`.
///
/// Entries on and above the diagonal are drawn uniformly from `[-1, 1)`
/// and mirrored below it. The same `seed` always yields the same matrix.
pub fn generate_symmetric(n: usize, seed: u64) -> CoefficientMatrix {
    let mut rng = create_rng(seed);
    generate_symmetric_with_rng(n, &mut rng)
}

/// [`generate_symmetric`] with a caller-supplied generator.
pub fn generate_symmetric_with_rng<R: Rng>(n: usize, rng: &mut R) -> CoefficientMatrix {
    let mut q = CoefficientMatrix::zeros(n);
    for i in 0..n {
        for j in i..n {
            let v = rng.random_range(-1.0..1.0);
            q.data[i * n + j] = v;
            q.data[j * n + i] = v;
        }
    }
    q
}
