//! Sweep configuration.

use super::algorithm::Algorithm;
use crate::exhaustive::ExhaustiveSolver;
use crate::grasp::GraspConfig;
use crate::local_search::LocalSearchConfig;
use crate::sa::SaConfig;

/// Seed for instance `instance` of size `size`: `size * 100 + instance`.
///
/// The same seed drives both matrix generation and the stochastic solvers.
pub fn instance_seed(size: usize, instance: usize) -> u64 {
    (size * 100 + instance) as u64
}

/// Configuration for an experiment sweep.
///
/// # Examples
///
/// ```
/// use u_ising::experiment::{Algorithm, ExperimentConfig};
///
/// let config = ExperimentConfig::default()
///     .with_sizes(4, 8, 2)
///     .with_instances_per_size(3)
///     .with_algorithms(vec![Algorithm::Greedy, Algorithm::Grasp]);
/// assert_eq!(config.sizes(), vec![4, 6, 8]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Smallest problem size.
    pub min_size: usize,
    /// Largest problem size (inclusive).
    pub max_size: usize,
    /// Increment between sizes.
    pub size_step: usize,
    /// Random instances generated per size.
    pub instances_per_size: usize,
    /// Exhaustive search only runs for sizes up to this bound.
    pub exhaustive_limit: usize,
    /// Algorithms to run, in report order.
    pub algorithms: Vec<Algorithm>,
    /// Local search hyperparameters. The seed is set per instance.
    pub local_search: LocalSearchConfig,
    /// SA hyperparameters. The seed is set per instance.
    pub sa: SaConfig,
    /// GRASP hyperparameters. The seed is set per instance.
    pub grasp: GraspConfig,
    /// Run instances on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            min_size: 5,
            max_size: 50,
            size_step: 5,
            instances_per_size: 10,
            exhaustive_limit: 20,
            algorithms: Algorithm::ALL.to_vec(),
            local_search: LocalSearchConfig::default(),
            sa: SaConfig::default(),
            grasp: GraspConfig::default(),
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Sets the size range `min..=max` and its step.
    pub fn with_sizes(mut self, min: usize, max: usize, step: usize) -> Self {
        self.min_size = min;
        self.max_size = max;
        self.size_step = step;
        self
    }

    pub fn with_instances_per_size(mut self, n: usize) -> Self {
        self.instances_per_size = n;
        self
    }

    pub fn with_exhaustive_limit(mut self, limit: usize) -> Self {
        self.exhaustive_limit = limit;
        self
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    pub fn with_sa(mut self, config: SaConfig) -> Self {
        self.sa = config;
        self
    }

    pub fn with_grasp(mut self, config: GraspConfig) -> Self {
        self.grasp = config;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// The problem sizes of the sweep, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        if self.size_step == 0 {
            return Vec::new();
        }
        (self.min_size..=self.max_size)
            .step_by(self.size_step)
            .collect()
    }

    /// Whether `algorithm` runs at `size`.
    pub fn runs(&self, algorithm: Algorithm, size: usize) -> bool {
        algorithm != Algorithm::Exhaustive || size <= self.exhaustive_limit
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.size_step == 0 {
            return Err("size_step must be positive".into());
        }
        if self.min_size > self.max_size {
            return Err(format!(
                "min_size ({}) must not exceed max_size ({})",
                self.min_size, self.max_size
            ));
        }
        if self.algorithms.is_empty() {
            return Err("at least one algorithm is required".into());
        }
        if self.exhaustive_limit > ExhaustiveSolver::MAX_DIMENSION {
            return Err(format!(
                "exhaustive_limit ({}) must not exceed {}",
                self.exhaustive_limit,
                ExhaustiveSolver::MAX_DIMENSION
            ));
        }
        self.sa.validate()?;
        self.grasp.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.sizes(), vec![5, 10, 15, 20, 25, 30, 35, 40, 45, 50]);
        assert_eq!(config.instances_per_size, 10);
        assert_eq!(config.algorithms.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_instance_seed() {
        assert_eq!(instance_seed(5, 0), 500);
        assert_eq!(instance_seed(50, 9), 5009);
    }

    #[test]
    fn test_exhaustive_cutoff() {
        let config = ExperimentConfig::default();
        assert!(config.runs(Algorithm::Exhaustive, 20));
        assert!(!config.runs(Algorithm::Exhaustive, 25));
        assert!(config.runs(Algorithm::Grasp, 50));
    }

    #[test]
    fn test_validate_errors() {
        assert!(ExperimentConfig::default()
            .with_sizes(5, 10, 0)
            .validate()
            .is_err());
        assert!(ExperimentConfig::default()
            .with_sizes(10, 5, 1)
            .validate()
            .is_err());
        assert!(ExperimentConfig::default()
            .with_algorithms(Vec::new())
            .validate()
            .is_err());
        assert!(ExperimentConfig::default()
            .with_grasp(GraspConfig::default().with_alpha(3.0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_exhaustive_limit() {
        let at_max =
            ExperimentConfig::default().with_exhaustive_limit(ExhaustiveSolver::MAX_DIMENSION);
        assert!(at_max.validate().is_ok());
        let over = ExperimentConfig::default().with_exhaustive_limit(64);
        assert!(over.validate().is_err());
    }
}
