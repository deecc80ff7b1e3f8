//! Error types for the stochsim-ensemble crate.

/// Error type for all fallible operations in the stochsim-ensemble crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnsembleError {
    /// Returned when the simulation configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a query asks for a time index past the horizon.
    #[error("time index {index} out of range (horizon is {horizon})")]
    IndexOutOfRange {
        /// The requested time index.
        index: usize,
        /// The last valid time index.
        horizon: usize,
    },

    /// Returned when an ensemble is built from no trajectories.
    #[error("ensemble contains no trajectories")]
    EmptyEnsemble,

    /// Returned when trajectories in an ensemble differ in length.
    #[error("trajectory {episode} has {len} states, expected {expected}")]
    RaggedTrajectories {
        /// 0-based trajectory index.
        episode: usize,
        /// Its length.
        len: usize,
        /// Length of the first trajectory.
        expected: usize,
    },
}
