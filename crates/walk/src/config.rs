//! Configuration for the one-dimensional random walk.

use crate::error::WalkError;

/// Step probabilities and start position.
///
/// # Example
///
/// ```
/// use stochsim_walk::WalkConfig;
///
/// let config = WalkConfig::new().with_probabilities(0.6, 0.4).with_start(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WalkConfig {
    p: f64,
    q: f64,
    x0: i64,
}

impl WalkConfig {
    /// Creates a symmetric walk from the origin (`p = q = 0.5`, `x0 = 0`).
    pub fn new() -> Self {
        Self {
            p: 0.5,
            q: 0.5,
            x0: 0,
        }
    }

    /// Sets the probabilities of stepping right (`p`) and left (`q`).
    pub fn with_probabilities(mut self, p: f64, q: f64) -> Self {
        self.p = p;
        self.q = q;
        self
    }

    /// Sets the start position.
    pub fn with_start(mut self, x0: i64) -> Self {
        self.x0 = x0;
        self
    }

    /// Returns the probability of a +1 step.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the probability of a -1 step.
    pub fn q(&self) -> f64 {
        self.q
    }

    /// Returns the start position.
    pub fn x0(&self) -> i64 {
        self.x0
    }

    /// Validates this configuration.
    ///
    /// `p` and `q` must each lie in `[0, 1]` and sum to 1 (tolerance: 1e-9).
    pub fn validate(&self) -> Result<(), WalkError> {
        for (name, value) in [("p", self.p), ("q", self.q)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WalkError::InvalidProbability { name, value });
            }
        }
        let sum = self.p + self.q;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(WalkError::ProbabilitySum { sum });
        }
        Ok(())
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new()
    }
}
