//! Transition rules and trajectory generation for discrete-time stochastic
//! processes.
//!
//! A [`TransitionRule`] knows how to draw the state at time 0 and how to
//! advance one step. [`rollout`] drives any rule for a fixed horizon, so the
//! categorical chain and the multiplicative price process share the same
//! generator.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  TransitionRule   │────▶│    rollout     │────▶│   Trajectory     │
//!  │ (initial + step)  │     │ (horizon steps)│     │ (horizon + 1)    │
//!  └──────────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use stochsim_chain::{CategoricalRule, rollout};
//!
//! let rule = CategoricalRule::from_rows(
//!     vec![vec![0.9, 0.1], vec![0.4, 0.6]],
//!     vec![1.0, 0.0],
//! )
//! .unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let traj = rollout(&rule, 10, &mut rng);
//! assert_eq!(traj.len(), 11);
//! assert_eq!(traj[0], 1);
//! ```

pub mod distribution;
pub mod error;
pub mod rollout;
pub mod rule;
pub mod state;
pub mod transition;

pub use distribution::InitialDistribution;
pub use error::ChainError;
pub use rollout::{Trajectory, rollout, rollout_into};
pub use rule::{CategoricalRule, MultiplicativeRule, TransitionRule};
pub use state::State;
pub use transition::TransitionMatrix;
