//! GRASP configuration.

/// Configuration parameters for GRASP.
///
/// # Examples
///
/// ```
/// use u_ising::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_max_iterations(20)
///     .with_alpha(0.5)
///     .with_seed(1);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.local_search_iterations, 1000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspConfig {
    /// Number of construct-then-refine rounds.
    pub max_iterations: usize,

    /// Greediness of the construction, in `[0, 1]`.
    ///
    /// The restricted candidate list holds the best
    /// `max(1, floor(alpha * |unassigned|))` candidates. `0` is pure
    /// greedy, `1` picks uniformly among all unassigned variables.
    pub alpha: f64,

    /// Sweep cap passed to the local search refinement.
    pub local_search_iterations: usize,

    /// Random seed (None for default seed).
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            alpha: 0.3,
            local_search_iterations: 1000,
            seed: None,
        }
    }
}

impl GraspConfig {
    /// Sets the number of rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the construction greediness.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the refinement sweep cap.
    pub fn with_local_search_iterations(mut self, n: usize) -> Self {
        self.local_search_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraspConfig::default();
        assert_eq!(config.max_iterations, 100);
        assert!((config.alpha - 0.3).abs() < 1e-15);
        assert_eq!(config.local_search_iterations, 1000);
    }

    #[test]
    fn test_validate_alpha() {
        assert!(GraspConfig::default().with_alpha(0.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(1.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(1.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(f64::NAN).validate().is_err());
    }
}
