//! Error types for the stochsim-chain crate.

/// Error type for all fallible operations in the stochsim-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a transition matrix has no rows.
    #[error("transition matrix is empty")]
    EmptyMatrix,

    /// Returned when an initial distribution has no entries.
    #[error("initial distribution is empty")]
    EmptyDistribution,

    /// Returned when a transition matrix row has the wrong number of columns.
    #[error("transition matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        /// 0-based row index.
        row: usize,
        /// Number of entries in the row.
        len: usize,
        /// Number of rows in the matrix.
        expected: usize,
    },

    /// Returned when a probability is non-finite or outside `[0, 1]`.
    #[error("invalid probability at {location}: {value} (must be finite and in [0, 1])")]
    InvalidProbability {
        /// Where the value was found, e.g. `row 2, column 0`.
        location: String,
        /// The invalid value.
        value: f64,
    },

    /// Returned when a transition matrix row does not sum to one.
    #[error("transition matrix row {row} sums to {sum}, expected 1")]
    RowSum {
        /// 0-based row index.
        row: usize,
        /// Actual row sum.
        sum: f64,
    },

    /// Returned when an initial distribution does not sum to one.
    #[error("initial distribution sums to {sum}, expected 1")]
    DistributionSum {
        /// Actual sum.
        sum: f64,
    },

    /// Returned when the initial distribution and matrix disagree on the state count.
    #[error("dimension mismatch: matrix has {matrix} states, initial distribution has {distribution}")]
    DimensionMismatch {
        /// Number of states in the transition matrix.
        matrix: usize,
        /// Length of the initial distribution.
        distribution: usize,
    },

    /// Returned when a multiplicative rule parameter is invalid.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a rollout buffer cannot hold even the initial state.
    #[error("rollout buffer is empty")]
    EmptyBuffer,
}
