//! Monte Carlo ensembles of discrete-time trajectories and the empirical
//! statistics computed from them.
//!
//! A [`Simulator`] drives any [`stochsim_chain::TransitionRule`] for
//! `n_episodes` independent rollouts and keeps the resulting [`Ensemble`].
//! Queries on the ensemble never re-simulate.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────────┐
//!  │  Simulator    │────▶│   Ensemble     │────▶│  pmf / moments /     │
//!  │ (rule + rng)  │     │ (trajectories) │     │  joint / conditional │
//!  └──────────────┘     └────────────────┘     └──────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use stochsim_chain::CategoricalRule;
//! use stochsim_ensemble::{EnsembleConfig, Event, Simulator};
//!
//! let rule = CategoricalRule::from_rows(
//!     vec![vec![0.9, 0.1], vec![0.4, 0.6]],
//!     vec![0.5, 0.5],
//! )
//! .unwrap();
//! let sim = Simulator::new(rule, EnsembleConfig::new(5, 1000).with_seed(7)).unwrap();
//! let ensemble = sim.ensemble();
//!
//! let pmf = ensemble.pmf(3).unwrap();
//! assert!((pmf.total() - 1.0).abs() < 1e-9);
//!
//! let p = ensemble
//!     .conditional_probability(&Event::value(3, 2), &Event::value(2, 2))
//!     .unwrap();
//! assert!((0.0..=1.0).contains(&p));
//! ```

pub mod config;
pub mod ensemble;
pub mod error;
pub mod event;
pub mod pmf;
pub mod simulator;

pub use config::EnsembleConfig;
pub use ensemble::Ensemble;
pub use error::EnsembleError;
pub use event::{Event, ValueSet};
pub use pmf::Pmf;
pub use simulator::{Simulator, make_rng};
