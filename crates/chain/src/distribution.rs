//! Distribution of the state at time 0 for categorical chains.

use crate::error::ChainError;
use crate::transition::{SUM_TOLERANCE, check_probability, sample_index};

/// A length-`K` probability vector over the 1-indexed states.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialDistribution {
    probs: Vec<f64>,
}

impl InitialDistribution {
    /// Builds an initial distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] if the vector is empty, holds a value outside
    /// `[0, 1]`, or does not sum to 1 (tolerance: 1e-6).
    pub fn new(probs: Vec<f64>) -> Result<Self, ChainError> {
        if probs.is_empty() {
            return Err(ChainError::EmptyDistribution);
        }
        for (i, &p) in probs.iter().enumerate() {
            check_probability(p, || format!("initial distribution entry {i}"))?;
        }
        let sum: f64 = probs.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(ChainError::DistributionSum { sum });
        }
        Ok(Self { probs })
    }

    /// Puts all mass on a single 1-indexed state.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidParameter`] if `state` is not in `1..=n_states`.
    pub fn point_mass(n_states: usize, state: u32) -> Result<Self, ChainError> {
        if state == 0 || state as usize > n_states {
            return Err(ChainError::InvalidParameter {
                name: "state",
                reason: format!("must be in 1..={n_states}, got {state}"),
            });
        }
        let mut probs = vec![0.0; n_states];
        probs[state as usize - 1] = 1.0;
        Ok(Self { probs })
    }

    /// Returns the number of states `K`.
    pub fn n_states(&self) -> usize {
        self.probs.len()
    }

    /// Returns the probability vector.
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Draws a 1-indexed initial state.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> u32 {
        sample_index(&self.probs, rng) as u32 + 1
    }
}
