//! Algorithm selector.

use crate::error::{IsingError, IsingResult};
use crate::exhaustive::ExhaustiveSolver;
use crate::grasp::{GraspConfig, GraspRunner};
use crate::greedy::GreedySolver;
use crate::local_search::{LocalSearchConfig, LocalSearchRunner};
use crate::model::{CoefficientMatrix, SolverResult};
use crate::sa::{SaConfig, SaRunner};
use std::fmt;
use std::str::FromStr;

/// One of the five solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    Exhaustive,
    Greedy,
    LocalSearch,
    SimulatedAnnealing,
    Grasp,
}

impl Algorithm {
    /// All algorithms, in report order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Exhaustive,
        Algorithm::Greedy,
        Algorithm::LocalSearch,
        Algorithm::SimulatedAnnealing,
        Algorithm::Grasp,
    ];

    /// Name used in the report's `algorithm` column.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Exhaustive => "exhaustive",
            Algorithm::Greedy => "greedy",
            Algorithm::LocalSearch => "local_search",
            Algorithm::SimulatedAnnealing => "simulated_annealing",
            Algorithm::Grasp => "grasp",
        }
    }

    /// Whether the algorithm consumes randomness.
    pub const fn is_stochastic(self) -> bool {
        matches!(
            self,
            Algorithm::LocalSearch | Algorithm::SimulatedAnnealing | Algorithm::Grasp
        )
    }

    /// Runs the algorithm on `matrix`.
    ///
    /// The stochastic solvers take their hyperparameters from the given
    /// configs. `Some(seed)` overrides the config's own seed; the
    /// deterministic solvers ignore it.
    pub fn solve(
        self,
        matrix: &CoefficientMatrix,
        seed: Option<u64>,
        local_search: &LocalSearchConfig,
        sa: &SaConfig,
        grasp: &GraspConfig,
    ) -> IsingResult<SolverResult> {
        match self {
            Algorithm::Exhaustive => ExhaustiveSolver::solve(matrix),
            Algorithm::Greedy => GreedySolver::solve(matrix),
            Algorithm::LocalSearch => {
                let config = LocalSearchConfig {
                    seed: seed.or(local_search.seed),
                    ..local_search.clone()
                };
                Ok(LocalSearchRunner::run(matrix, &config)?.solution)
            }
            Algorithm::SimulatedAnnealing => {
                let config = SaConfig {
                    seed: seed.or(sa.seed),
                    ..sa.clone()
                };
                Ok(SaRunner::run(matrix, &config)?.solution)
            }
            Algorithm::Grasp => {
                let config = GraspConfig {
                    seed: seed.or(grasp.seed),
                    ..grasp.clone()
                };
                Ok(GraspRunner::run(matrix, &config)?.solution)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = IsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s.trim())
            .ok_or_else(|| IsingError::InvalidConfig(format!("unknown algorithm '{s}'")))
    }
}
