//! Configuration for ensemble simulation.

use crate::error::EnsembleError;

/// Shape and seeding of an ensemble.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use stochsim_ensemble::EnsembleConfig;
///
/// let config = EnsembleConfig::new(10, 10_000).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EnsembleConfig {
    horizon: usize,
    n_episodes: usize,
    seed: Option<u64>,
}

impl EnsembleConfig {
    /// Creates a configuration for `n_episodes` trajectories of `horizon` steps.
    pub fn new(horizon: usize, n_episodes: usize) -> Self {
        Self {
            horizon,
            n_episodes,
            seed: None,
        }
    }

    /// Sets the number of transitions per trajectory.
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the number of trajectories.
    pub fn with_n_episodes(mut self, n_episodes: usize) -> Self {
        self.n_episodes = n_episodes;
        self
    }

    /// Sets the RNG seed. Without one the generator is seeded from the OS.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns the number of transitions per trajectory.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the number of trajectories.
    pub fn n_episodes(&self) -> usize {
        self.n_episodes
    }

    /// Returns the RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// Both `horizon` and `n_episodes` must be positive.
    pub fn validate(&self) -> Result<(), EnsembleError> {
        if self.horizon == 0 {
            return Err(EnsembleError::InvalidConfig {
                reason: "horizon must be positive".to_string(),
            });
        }
        if self.n_episodes == 0 {
            return Err(EnsembleError::InvalidConfig {
                reason: "n_episodes must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EnsembleConfig {
    /// Defaults: `horizon = 10`, `n_episodes = 1000`, no seed.
    fn default() -> Self {
        Self::new(10, 1000)
    }
}
