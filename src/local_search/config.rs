//! Local search configuration.

/// Configuration parameters for single-flip local search.
///
/// # Examples
///
/// ```
/// use u_ising::local_search::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(50)
///     .with_seed(7);
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of full sweeps over the variables.
    pub max_iterations: usize,
    /// Random seed for the starting assignment (None for default seed).
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            seed: None,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the sweep cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
