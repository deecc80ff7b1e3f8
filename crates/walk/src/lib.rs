//! One-dimensional random walk return-time estimator.
//!
//! A single walk steps +1 or -1 and restarts every time it comes back to its
//! start position. The lengths of those excursions (return times) and their
//! running average are recorded. For the symmetric walk the expected return
//! time is infinite, so the running average keeps drifting upward instead of
//! settling.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stochsim_walk::{WalkConfig, estimate_return_times};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = estimate_return_times(&WalkConfig::new(), 10_000, &mut rng).unwrap();
//! assert!(result.return_times().iter().all(|&t| t % 2 == 0));
//! ```

mod config;
mod error;
mod result;
mod walk;

pub use config::WalkConfig;
pub use error::WalkError;
pub use result::ReturnTimes;
pub use walk::{RandomWalk, estimate_return_times};
