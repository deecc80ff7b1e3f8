//! Owns a transition rule and the ensemble simulated from it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use stochsim_chain::{TransitionRule, rollout};
use tracing::debug;

use crate::config::EnsembleConfig;
use crate::ensemble::Ensemble;
use crate::error::EnsembleError;

/// Builds a seeded or OS-sourced RNG.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Simulation run: a rule, its configuration, an RNG, and the current ensemble.
///
/// The ensemble is simulated in full at construction and replaced wholesale
/// by [`Simulator::reset`]. Every trajectory is held in memory, so the cost
/// is `n_episodes * (horizon + 1)` states; in exchange any query can be
/// asked after the fact.
///
/// # Example
///
/// ```
/// use stochsim_chain::MultiplicativeRule;
/// use stochsim_ensemble::{EnsembleConfig, Simulator};
///
/// let rule = MultiplicativeRule::new(1.0, 0.5, 0.1, 0.05).unwrap();
/// let sim = Simulator::new(rule, EnsembleConfig::new(1, 20_000).with_seed(1)).unwrap();
/// let mean = sim.ensemble().expected_value(1).unwrap();
/// assert!((mean - 1.025).abs() < 0.005);
/// ```
#[derive(Debug)]
pub struct Simulator<R: TransitionRule, G = StdRng> {
    rule: R,
    config: EnsembleConfig,
    rng: G,
    ensemble: Ensemble<R::State>,
}

impl<R: TransitionRule> Simulator<R, StdRng> {
    /// Validates `config`, seeds a [`StdRng`] from it and simulates the
    /// first ensemble.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::InvalidConfig`] if the configuration is invalid.
    pub fn new(rule: R, config: EnsembleConfig) -> Result<Self, EnsembleError> {
        config.validate()?;
        let rng = make_rng(config.seed());
        Self::with_rng(rule, config, rng)
    }
}

impl<R: TransitionRule, G: rand::Rng> Simulator<R, G> {
    /// Like [`Simulator::new`] but draws from a caller-supplied generator.
    /// The configured seed is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::InvalidConfig`] if the configuration is invalid.
    pub fn with_rng(rule: R, config: EnsembleConfig, rng: G) -> Result<Self, EnsembleError> {
        config.validate()?;
        let mut sim = Self {
            ensemble: Ensemble::from_parts(Vec::new(), config.horizon()),
            rule,
            config,
            rng,
        };
        sim.reset();
        Ok(sim)
    }

    /// Simulates a fresh ensemble without touching the stored one.
    #[tracing::instrument(skip(self), fields(horizon = self.config.horizon(), n_episodes = self.config.n_episodes()))]
    pub fn simulate(&mut self) -> Ensemble<R::State> {
        let horizon = self.config.horizon();
        let trajectories = (0..self.config.n_episodes())
            .map(|_| rollout(&self.rule, horizon, &mut self.rng))
            .collect();
        Ensemble::from_parts(trajectories, horizon)
    }

    /// Discards the current ensemble and simulates a new one with the same
    /// rule and configuration.
    pub fn reset(&mut self) {
        self.ensemble = self.simulate();
        debug!(n_episodes = self.ensemble.len(), "ensemble regenerated");
    }

    /// Returns the current ensemble.
    pub fn ensemble(&self) -> &Ensemble<R::State> {
        &self.ensemble
    }

    /// Consumes the simulator, keeping only the ensemble.
    pub fn into_ensemble(self) -> Ensemble<R::State> {
        self.ensemble
    }

    /// Returns the transition rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EnsembleConfig {
        &self.config
    }
}
