//! Spin values and random assignments.

use rand::Rng;
use std::fmt;
use std::ops::Neg;

/// A single ±1 variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spin {
    /// `+1`.
    Up,
    /// `-1`.
    Down,
}

impl Spin {
    /// Numeric value used in the quadratic form.
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            Spin::Up => 1.0,
            Spin::Down => -1.0,
        }
    }

    /// Integer sign, `1` or `-1`.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    /// The opposite spin.
    #[inline]
    pub const fn flipped(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    /// Draws `Up` or `Down` with equal probability.
    pub fn random<R: Rng>(rng: &mut R) -> Spin {
        if rng.random_range(0..2) == 0 {
            Spin::Down
        } else {
            Spin::Up
        }
    }
}

impl Neg for Spin {
    type Output = Spin;

    fn neg(self) -> Spin {
        self.flipped()
    }
}

impl From<Spin> for f64 {
    fn from(spin: Spin) -> f64 {
        spin.value()
    }
}

impl From<Spin> for i8 {
    fn from(spin: Spin) -> i8 {
        spin.sign()
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Up => write!(f, "+1"),
            Spin::Down => write!(f, "-1"),
        }
    }
}

/// Builds an assignment of length `n`, every spin drawn independently.
pub fn random_assignment<R: Rng>(n: usize, rng: &mut R) -> Vec<Spin> {
    (0..n).map(|_| Spin::random(rng)).collect()
}

/// Negates every spin of an assignment.
pub fn negated(assignment: &[Spin]) -> Vec<Spin> {
    assignment.iter().map(|&s| -s).collect()
}
