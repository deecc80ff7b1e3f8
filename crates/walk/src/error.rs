//! Error types for the stochsim-walk crate.

/// Error type for all fallible operations in the stochsim-walk crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WalkError {
    /// Returned when a step probability is non-finite or outside `[0, 1]`.
    #[error("invalid probability {name}: {value} (must be finite and in [0, 1])")]
    InvalidProbability {
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// Returned when the right and left probabilities do not sum to one.
    #[error("step probabilities sum to {sum}, expected 1")]
    ProbabilitySum {
        /// Actual `p + q`.
        sum: f64,
    },

    /// Returned when a step would move the walk past the range of `i64`.
    #[error("walk position overflowed stepping from {position}")]
    PositionOverflow {
        /// Position before the failed step.
        position: i64,
    },
}
