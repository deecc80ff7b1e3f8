//! Transition rules: how a process advances by one step.

use crate::distribution::InitialDistribution;
use crate::error::ChainError;
use crate::state::State;
use crate::transition::TransitionMatrix;

/// The capability "advance one step given the current state".
///
/// A rule also knows how to produce the state at time 0. Everything else
/// about a rollout is shared across rules.
pub trait TransitionRule {
    /// The state type this rule produces.
    type State: State;

    /// Draws (or returns) the state at time 0.
    fn initial_state(&self, rng: &mut impl rand::Rng) -> Self::State;

    /// Produces the state at `time + 1` from the state at `time`.
    fn step(&self, state: Self::State, time: usize, rng: &mut impl rand::Rng) -> Self::State;
}

/// Finite-state Markov chain with a fixed row-stochastic transition matrix.
///
/// States are 1-indexed `u32` labels in `1..=K`.
#[derive(Debug, Clone)]
pub struct CategoricalRule {
    matrix: TransitionMatrix,
    initial: InitialDistribution,
}

impl CategoricalRule {
    /// Pairs a transition matrix with an initial distribution.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::DimensionMismatch`] if the two disagree on `K`.
    pub fn new(
        matrix: TransitionMatrix,
        initial: InitialDistribution,
    ) -> Result<Self, ChainError> {
        if matrix.n_states() != initial.n_states() {
            return Err(ChainError::DimensionMismatch {
                matrix: matrix.n_states(),
                distribution: initial.n_states(),
            });
        }
        Ok(Self { matrix, initial })
    }

    /// Validates raw rows and an initial probability vector in one go.
    pub fn from_rows(rows: Vec<Vec<f64>>, initial: Vec<f64>) -> Result<Self, ChainError> {
        Self::new(TransitionMatrix::new(rows)?, InitialDistribution::new(initial)?)
    }

    /// Returns the number of states `K`.
    pub fn n_states(&self) -> usize {
        self.matrix.n_states()
    }

    /// Returns the transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Returns the initial distribution.
    pub fn initial(&self) -> &InitialDistribution {
        &self.initial
    }
}

impl TransitionRule for CategoricalRule {
    type State = u32;

    fn initial_state(&self, rng: &mut impl rand::Rng) -> u32 {
        self.initial.sample(rng)
    }

    /// # Panics
    ///
    /// Panics if `state` is outside `1..=K`.
    fn step(&self, state: u32, _time: usize, rng: &mut impl rand::Rng) -> u32 {
        self.matrix.sample(state, rng)
    }
}

/// Price-like process: each step multiplies by `1 + u` with probability `p`,
/// otherwise by `1 - d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplicativeRule {
    initial_price: f64,
    p: f64,
    u: f64,
    d: f64,
}

impl MultiplicativeRule {
    /// Builds a multiplicative rule.
    ///
    /// No floor or cap is applied to the resulting prices.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::InvalidParameter`] if `p` is outside `[0, 1]` or
    /// any parameter is non-finite.
    pub fn new(initial_price: f64, p: f64, u: f64, d: f64) -> Result<Self, ChainError> {
        for (name, value) in [("initial_price", initial_price), ("u", u), ("d", d)] {
            if !value.is_finite() {
                return Err(ChainError::InvalidParameter {
                    name,
                    reason: format!("must be finite, got {value}"),
                });
            }
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(ChainError::InvalidParameter {
                name: "p",
                reason: format!("must be in [0, 1], got {p}"),
            });
        }
        Ok(Self {
            initial_price,
            p,
            u,
            d,
        })
    }

    /// Returns the price at time 0.
    pub fn initial_price(&self) -> f64 {
        self.initial_price
    }

    /// Returns the up-move probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the up factor.
    pub fn u(&self) -> f64 {
        self.u
    }

    /// Returns the down factor.
    pub fn d(&self) -> f64 {
        self.d
    }
}

impl TransitionRule for MultiplicativeRule {
    type State = f64;

    fn initial_state(&self, _rng: &mut impl rand::Rng) -> f64 {
        self.initial_price
    }

    fn step(&self, state: f64, _time: usize, rng: &mut impl rand::Rng) -> f64 {
        if rng.random_bool(self.p) {
            state * (1.0 + self.u)
        } else {
            state * (1.0 - self.d)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn categorical_dimension_mismatch() {
        let result = CategoricalRule::from_rows(
            vec![vec![0.5, 0.5], vec![0.5, 0.5]],
            vec![0.2, 0.3, 0.5],
        );
        assert!(matches!(
            result,
            Err(ChainError::DimensionMismatch {
                matrix: 2,
                distribution: 3
            })
        ));
    }

    #[test]
    fn categorical_identity_keeps_state() {
        let rule = CategoricalRule::from_rows(
            vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]],
            vec![0.0, 1.0, 0.0],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let s0 = rule.initial_state(&mut rng);
        assert_eq!(s0, 2);
        for t in 0..20 {
            assert_eq!(rule.step(2, t, &mut rng), 2);
        }
    }

    #[test]
    fn categorical_cycle() {
        let rule = CategoricalRule::from_rows(
            vec![vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]],
            vec![1.0, 0.0, 0.0],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(rule.step(1, 0, &mut rng), 2);
        assert_eq!(rule.step(2, 1, &mut rng), 3);
        assert_eq!(rule.step(3, 2, &mut rng), 1);
    }

    #[test]
    fn multiplicative_bad_p() {
        assert!(MultiplicativeRule::new(1.0, 1.5, 0.1, 0.05).is_err());
        assert!(MultiplicativeRule::new(1.0, -0.1, 0.1, 0.05).is_err());
        assert!(MultiplicativeRule::new(1.0, f64::NAN, 0.1, 0.05).is_err());
    }

    #[test]
    fn multiplicative_non_finite() {
        assert!(MultiplicativeRule::new(f64::INFINITY, 0.5, 0.1, 0.05).is_err());
        assert!(MultiplicativeRule::new(1.0, 0.5, f64::NAN, 0.05).is_err());
        assert!(MultiplicativeRule::new(1.0, 0.5, 0.1, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn multiplicative_certain_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let up = MultiplicativeRule::new(2.0, 1.0, 0.1, 0.05).unwrap();
        assert_eq!(up.initial_state(&mut rng), 2.0);
        assert_abs_diff_eq!(up.step(2.0, 0, &mut rng), 2.2, epsilon = 1e-12);

        let down = MultiplicativeRule::new(2.0, 0.0, 0.1, 0.05).unwrap();
        assert_abs_diff_eq!(down.step(2.0, 0, &mut rng), 1.9, epsilon = 1e-12);
    }

    #[test]
    fn multiplicative_only_two_outcomes() {
        let rule = MultiplicativeRule::new(1.0, 0.5, 0.1, 0.05).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mut ups = 0usize;
        let n = 10_000;
        for _ in 0..n {
            let next = rule.step(1.0, 0, &mut rng);
            if next == 1.0 * (1.0 + 0.1) {
                ups += 1;
            } else {
                assert_eq!(next, 1.0 * (1.0 - 0.05));
            }
        }
        let frac = ups as f64 / n as f64;
        assert!((frac - 0.5).abs() < 0.03, "up frequency {frac}");
    }
}
