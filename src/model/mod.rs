//! Objective model.
//!
//! The problem is to minimize the quadratic form
//! `f(x) = Σᵢⱼ Q[i][j]·x[i]·x[j]` over assignments `x ∈ {-1, +1}ⁿ`,
//! where `Q` is a real symmetric [`CoefficientMatrix`].

mod matrix;
mod result;
mod spin;

pub use matrix::{generate_symmetric, generate_symmetric_with_rng, CoefficientMatrix};
pub use result::SolverResult;
pub use spin::{negated, random_assignment, Spin};
