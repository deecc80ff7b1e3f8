//! Row-stochastic transition matrices and categorical sampling.

use crate::error::ChainError;

/// Tolerance on row and distribution sums.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// A `K x K` row-stochastic transition matrix.
///
/// Row `i` holds the distribution of the next state given the current state
/// `i + 1` (states are 1-indexed, rows 0-indexed).
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n_states: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a transition matrix from its rows.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] if the matrix is empty, not square, holds a
    /// probability outside `[0, 1]`, or has a row that does not sum to 1
    /// (tolerance: 1e-6).
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, ChainError> {
        let n_states = rows.len();
        if n_states == 0 {
            return Err(ChainError::EmptyMatrix);
        }
        let mut probs = Vec::with_capacity(n_states * n_states);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_states {
                return Err(ChainError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n_states,
                });
            }
            for (j, &p) in row.iter().enumerate() {
                check_probability(p, || format!("row {i}, column {j}"))?;
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(ChainError::RowSum { row: i, sum });
            }
            probs.extend_from_slice(row);
        }
        Ok(Self { n_states, probs })
    }

    /// Returns the number of states `K`.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the transition probabilities out of a 1-indexed state.
    ///
    /// # Panics
    ///
    /// Panics if `from` is 0 or greater than `K`.
    pub fn row(&self, from: u32) -> &[f64] {
        let k = self.n_states;
        assert!(
            (1..=k).contains(&(from as usize)),
            "state must be 1..={k}, got {from}"
        );
        let start = (from as usize - 1) * k;
        &self.probs[start..start + k]
    }

    /// Returns the probability of moving from one 1-indexed state to another.
    pub fn prob(&self, from: u32, to: u32) -> f64 {
        self.row(from)[to as usize - 1]
    }

    /// Iterates over the rows in state order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.probs.chunks_exact(self.n_states)
    }

    /// Samples the next 1-indexed state given the current one.
    pub fn sample(&self, from: u32, rng: &mut impl rand::Rng) -> u32 {
        sample_index(self.row(from), rng) as u32 + 1
    }
}

/// Checks that a single probability is finite and within `[0, 1]`.
pub(crate) fn check_probability(
    p: f64,
    location: impl FnOnce() -> String,
) -> Result<(), ChainError> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ChainError::InvalidProbability {
            location: location(),
            value: p,
        });
    }
    Ok(())
}

/// Draws a 0-based index from a probability vector using its cumulative CDF.
///
/// Draws one uniform number and returns the first index whose cumulative
/// probability meets or exceeds it. Falls back to the last index if rounding
/// leaves the total just short of the draw.
pub(crate) fn sample_index(probs: &[f64], rng: &mut impl rand::Rng) -> usize {
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        // Zero-probability entries are never chosen, even when u == 0.
        if p > 0.0 && cumulative >= u {
            return i;
        }
    }
    probs.iter().rposition(|&p| p > 0.0).unwrap_or(probs.len() - 1)
}
