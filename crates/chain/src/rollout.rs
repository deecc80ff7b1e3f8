//! Trajectory generation.

use std::ops::Index;

use crate::error::ChainError;
use crate::rule::TransitionRule;
use crate::state::State;

/// One simulated sequence of states at times `0..=horizon`.
///
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<S> {
    states: Vec<S>,
}

impl<S: State> Trajectory<S> {
    /// Returns the number of states (`horizon + 1`).
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the trajectory holds no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the number of transitions, or `None` for an empty trajectory.
    pub fn horizon(&self) -> Option<usize> {
        self.states.len().checked_sub(1)
    }

    /// Returns the state at time `n`, if present.
    pub fn get(&self, n: usize) -> Option<S> {
        self.states.get(n).copied()
    }

    /// Returns the states as a slice.
    pub fn as_slice(&self) -> &[S] {
        &self.states
    }

    /// Iterates over the states in time order.
    pub fn iter(&self) -> impl Iterator<Item = S> + '_ {
        self.states.iter().copied()
    }
}

impl<S> From<Vec<S>> for Trajectory<S> {
    fn from(states: Vec<S>) -> Self {
        Self { states }
    }
}

impl<S> Index<usize> for Trajectory<S> {
    type Output = S;

    fn index(&self, n: usize) -> &S {
        &self.states[n]
    }
}

/// Simulates one trajectory of `horizon + 1` states.
///
/// # Arguments
///
/// * `rule` - Transition rule supplying the initial state and each step.
/// * `horizon` - Number of transitions to apply.
/// * `rng` - Random number generator.
pub fn rollout<R: TransitionRule>(
    rule: &R,
    horizon: usize,
    rng: &mut impl rand::Rng,
) -> Trajectory<R::State> {
    let mut states = Vec::with_capacity(horizon + 1);
    let mut x = rule.initial_state(rng);
    states.push(x);
    for t in 0..horizon {
        x = rule.step(x, t, rng);
        states.push(x);
    }
    Trajectory { states }
}

/// Simulates one trajectory into a pre-allocated buffer.
///
/// The buffer length fixes the trajectory length: `out[0]` receives the
/// initial state and each later slot one transition.
///
/// # Errors
///
/// Returns [`ChainError::EmptyBuffer`] if `out` is empty.
pub fn rollout_into<R: TransitionRule>(
    rule: &R,
    rng: &mut impl rand::Rng,
    out: &mut [R::State],
) -> Result<(), ChainError> {
    let Some((first, rest)) = out.split_first_mut() else {
        return Err(ChainError::EmptyBuffer);
    };
    let mut x = rule.initial_state(rng);
    *first = x;
    for (t, slot) in rest.iter_mut().enumerate() {
        x = rule.step(x, t, rng);
        *slot = x;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{CategoricalRule, MultiplicativeRule};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn three_state() -> CategoricalRule {
        CategoricalRule::from_rows(
            vec![
                vec![0.5, 0.3, 0.2],
                vec![0.1, 0.7, 0.2],
                vec![0.2, 0.3, 0.5],
            ],
            vec![0.2, 0.5, 0.3],
        )
        .unwrap()
    }

    /// Counts up from the initial value; records the time index it was handed.
    struct Counter;

    impl TransitionRule for Counter {
        type State = u32;

        fn initial_state(&self, _rng: &mut impl rand::Rng) -> u32 {
            100
        }

        fn step(&self, _state: u32, time: usize, _rng: &mut impl rand::Rng) -> u32 {
            time as u32
        }
    }

    #[test]
    fn length_is_horizon_plus_one() {
        let mut rng = StdRng::seed_from_u64(42);
        let traj = rollout(&three_state(), 10, &mut rng);
        assert_eq!(traj.len(), 11);
        assert_eq!(traj.horizon(), Some(10));
        assert!(traj.iter().all(|s| (1..=3).contains(&s)));
    }

    #[test]
    fn zero_horizon_is_initial_only() {
        let mut rng = StdRng::seed_from_u64(42);
        let rule = MultiplicativeRule::new(3.5, 0.5, 0.1, 0.05).unwrap();
        let traj = rollout(&rule, 0, &mut rng);
        assert_eq!(traj.as_slice(), &[3.5]);
    }

    #[test]
    fn step_receives_time_index() {
        let mut rng = StdRng::seed_from_u64(0);
        let traj = rollout(&Counter, 4, &mut rng);
        assert_eq!(traj.as_slice(), &[100, 0, 1, 2, 3]);
    }

    #[test]
    fn deterministic_with_seed() {
        let rule = three_state();
        let a = rollout(&rule, 50, &mut StdRng::seed_from_u64(123));
        let b = rollout(&rule, 50, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn successive_rollouts_differ() {
        let rule = three_state();
        let mut rng = StdRng::seed_from_u64(5);
        let a = rollout(&rule, 50, &mut rng);
        let b = rollout(&rule, 50, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn into_matches_allocating() {
        let rule = three_state();
        let alloc = rollout(&rule, 30, &mut StdRng::seed_from_u64(999));
        let mut buf = vec![0u32; 31];
        rollout_into(&rule, &mut StdRng::seed_from_u64(999), &mut buf).unwrap();
        assert_eq!(alloc.as_slice(), buf.as_slice());
    }

    #[test]
    fn into_empty_buffer() {
        let mut buf: Vec<u32> = Vec::new();
        let result = rollout_into(&three_state(), &mut StdRng::seed_from_u64(1), &mut buf);
        assert!(matches!(result, Err(ChainError::EmptyBuffer)));
    }

    #[test]
    fn multiplicative_path_is_product_of_moves() {
        let rule = MultiplicativeRule::new(1.0, 0.5, 0.1, 0.05).unwrap();
        let traj = rollout(&rule, 25, &mut StdRng::seed_from_u64(77));
        for pair in traj.as_slice().windows(2) {
            let ratio = pair[1] / pair[0];
            assert!(
                (ratio - 1.1).abs() < 1e-9 || (ratio - 0.95).abs() < 1e-9,
                "unexpected step ratio {ratio}"
            );
        }
    }

    #[test]
    fn index_and_get() {
        let traj = Trajectory::from(vec![1u32, 4, 2]);
        assert_eq!(traj[1], 4);
        assert_eq!(traj.get(2), Some(2));
        assert_eq!(traj.get(3), None);
        assert!(!traj.is_empty());
    }
}
