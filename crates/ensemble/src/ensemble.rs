//! A materialised ensemble of trajectories and the queries it answers.

use stochsim_chain::{State, Trajectory};

use crate::error::EnsembleError;
use crate::event::Event;
use crate::pmf::Pmf;

/// `n_episodes` trajectories of equal length `horizon + 1`.
///
/// All queries read the stored trajectories; none of them simulate. An
/// ensemble is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble<S> {
    trajectories: Vec<Trajectory<S>>,
    horizon: usize,
}

impl<S: State> Ensemble<S> {
    /// Wraps a set of trajectories.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::EmptyEnsemble`] if `trajectories` is empty or
    /// holds only empty trajectories, and
    /// [`EnsembleError::RaggedTrajectories`] if lengths differ.
    pub fn new(trajectories: Vec<Trajectory<S>>) -> Result<Self, EnsembleError> {
        let Some(first) = trajectories.first() else {
            return Err(EnsembleError::EmptyEnsemble);
        };
        let Some(horizon) = first.horizon() else {
            return Err(EnsembleError::EmptyEnsemble);
        };
        let expected = first.len();
        for (episode, t) in trajectories.iter().enumerate() {
            if t.len() != expected {
                return Err(EnsembleError::RaggedTrajectories {
                    episode,
                    len: t.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            trajectories,
            horizon,
        })
    }

    /// Wraps trajectories already known to be non-empty and of length `horizon + 1`.
    pub(crate) fn from_parts(trajectories: Vec<Trajectory<S>>, horizon: usize) -> Self {
        debug_assert!(trajectories.iter().all(|t| t.len() == horizon + 1));
        Self {
            trajectories,
            horizon,
        }
    }

    /// Returns the number of trajectories (`n_episodes`).
    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    /// Always `false`: an ensemble holds at least one trajectory.
    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// Returns the last valid time index.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the trajectories in generation order.
    pub fn trajectories(&self) -> &[Trajectory<S>] {
        &self.trajectories
    }

    /// Returns the states observed at time `n` across all trajectories.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if `n > horizon`.
    pub fn values_at(&self, n: usize) -> Result<Vec<S>, EnsembleError> {
        self.check_index(n)?;
        Ok(self.trajectories.iter().map(|t| t[n]).collect())
    }

    /// Empirical PMF of the state at time `n`, keys ascending.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if `n > horizon`.
    pub fn pmf(&self, n: usize) -> Result<Pmf<S>, EnsembleError> {
        Ok(Pmf::from_samples(&self.values_at(n)?))
    }

    /// Expected state at time `n` under the empirical PMF.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if `n > horizon`.
    pub fn expected_value(&self, n: usize) -> Result<f64, EnsembleError> {
        Ok(self.pmf(n)?.expected_value())
    }

    /// Population variance of the state at time `n` under the empirical PMF.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if `n > horizon`.
    pub fn variance(&self, n: usize) -> Result<f64, EnsembleError> {
        Ok(self.pmf(n)?.variance())
    }

    /// Fraction of trajectories in which both events occur.
    ///
    /// Symmetric in its arguments.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if either event index
    /// exceeds the horizon.
    pub fn joint_probability(&self, a: &Event<S>, b: &Event<S>) -> Result<f64, EnsembleError> {
        self.check_index(a.index())?;
        self.check_index(b.index())?;
        let count = self
            .trajectories
            .iter()
            .filter(|t| a.matches(t.as_slice()) && b.matches(t.as_slice()))
            .count();
        Ok(count as f64 / self.len() as f64)
    }

    /// `P(event | given)`: among trajectories where `given` occurs, the
    /// fraction where `event` also occurs.
    ///
    /// Returns exactly `0.0` when `given` never occurs in the ensemble.
    ///
    /// # Errors
    ///
    /// Returns [`EnsembleError::IndexOutOfRange`] if either event index
    /// exceeds the horizon.
    pub fn conditional_probability(
        &self,
        event: &Event<S>,
        given: &Event<S>,
    ) -> Result<f64, EnsembleError> {
        self.check_index(event.index())?;
        self.check_index(given.index())?;
        let mut numerator = 0usize;
        let mut denominator = 0usize;
        for t in &self.trajectories {
            if given.matches(t.as_slice()) {
                denominator += 1;
                if event.matches(t.as_slice()) {
                    numerator += 1;
                }
            }
        }
        if denominator == 0 {
            return Ok(0.0);
        }
        Ok(numerator as f64 / denominator as f64)
    }

    fn check_index(&self, n: usize) -> Result<(), EnsembleError> {
        if n > self.horizon {
            return Err(EnsembleError::IndexOutOfRange {
                index: n,
                horizon: self.horizon,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Four hand-written trajectories over states 1..=5, horizon 2.
    fn small() -> Ensemble<u32> {
        Ensemble::new(vec![
            vec![1, 2, 4].into(),
            vec![1, 3, 5].into(),
            vec![5, 2, 5].into(),
            vec![5, 4, 4].into(),
        ])
        .unwrap()
    }

    #[test]
    fn shape() {
        let e = small();
        assert_eq!(e.len(), 4);
        assert_eq!(e.horizon(), 2);
        assert!(!e.is_empty());
        assert_eq!(e.values_at(1).unwrap(), vec![2, 3, 2, 4]);
    }

    #[test]
    fn empty_rejected() {
        let result: Result<Ensemble<u32>, _> = Ensemble::new(vec![]);
        assert!(matches!(result, Err(EnsembleError::EmptyEnsemble)));

        let result: Result<Ensemble<u32>, _> = Ensemble::new(vec![Vec::new().into()]);
        assert!(matches!(result, Err(EnsembleError::EmptyEnsemble)));
    }

    #[test]
    fn ragged_rejected() {
        let result = Ensemble::new(vec![vec![1u32, 2].into(), vec![1u32].into()]);
        assert!(matches!(
            result,
            Err(EnsembleError::RaggedTrajectories {
                episode: 1,
                len: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn pmf_at_zero() {
        let pmf = small().pmf(0).unwrap();
        assert_eq!(pmf.entries(), &[(1, 0.5), (5, 0.5)]);
    }

    #[test]
    fn index_past_horizon_fails() {
        let e = small();
        assert!(matches!(
            e.pmf(3),
            Err(EnsembleError::IndexOutOfRange {
                index: 3,
                horizon: 2
            })
        ));
        assert!(e.expected_value(3).is_err());
        assert!(e.variance(3).is_err());
        assert!(e.values_at(3).is_err());
        assert!(
            e.joint_probability(&Event::value(0, 1), &Event::value(3, 1))
                .is_err()
        );
        assert!(
            e.conditional_probability(&Event::value(3, 1), &Event::value(0, 1))
                .is_err()
        );
    }

    #[test]
    fn expected_value_and_variance() {
        let e = small();
        // index 2: [4, 5, 5, 4]
        assert_abs_diff_eq!(e.expected_value(2).unwrap(), 4.5, epsilon = 1e-12);
        assert_abs_diff_eq!(e.variance(2).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn joint_counts_simultaneous_membership() {
        let e = small();
        // state 1 at t=0 and state in {4, 5} at t=2: trajectories 0 and 1.
        let p = e
            .joint_probability(&Event::value(0, 1), &Event::any_of(2, [4, 5]))
            .unwrap();
        assert_abs_diff_eq!(p, 0.5, epsilon = 1e-12);

        let p = e
            .joint_probability(&Event::value(1, 2), &Event::value(2, 5))
            .unwrap();
        assert_abs_diff_eq!(p, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn joint_is_symmetric() {
        let e = small();
        let a = Event::any_of(0, [1, 5]);
        let b = Event::value(1, 2);
        assert_eq!(
            e.joint_probability(&a, &b).unwrap(),
            e.joint_probability(&b, &a).unwrap()
        );
    }

    #[test]
    fn conditional_is_order_sensitive() {
        let e = small();
        let x0_is_5 = Event::value(0, 5);
        let x2_is_5 = Event::value(2, 5);
        // P(X2 = 5 | X0 = 5): trajectories 2, 3 have X0 = 5; only 2 has X2 = 5.
        assert_abs_diff_eq!(
            e.conditional_probability(&x2_is_5, &x0_is_5).unwrap(),
            0.5,
            epsilon = 1e-12
        );
        // P(X0 = 5 | X2 = 5): trajectories 1, 2 have X2 = 5; only 2 has X0 = 5.
        assert_abs_diff_eq!(
            e.conditional_probability(&x0_is_5, &x2_is_5).unwrap(),
            0.5,
            epsilon = 1e-12
        );
        // P(X1 = 2 | X0 = 1) = 1/2, P(X0 = 1 | X1 = 2) = 1/2, P(X1 = 3 | X0 = 1) = 1/2,
        // P(X0 = 1 | X1 = 3) = 1.
        assert_abs_diff_eq!(
            e.conditional_probability(&Event::value(0, 1), &Event::value(1, 3))
                .unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            e.conditional_probability(&Event::value(1, 3), &Event::value(0, 1))
                .unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn conditional_zero_support_is_zero() {
        let e = small();
        let p = e
            .conditional_probability(&Event::value(2, 4), &Event::value(0, 3))
            .unwrap();
        assert_eq!(p, 0.0);

        let p = e
            .conditional_probability(&Event::value(2, 4), &Event::new(0, Vec::new()))
            .unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn singleton_coercion_equivalence() {
        let e = small();
        let scalar = e
            .joint_probability(&Event::value(1, 2), &Event::value(2, 4))
            .unwrap();
        let listed = e
            .joint_probability(&Event::new(1, vec![2]), &Event::new(2, [4]))
            .unwrap();
        assert_eq!(scalar, listed);

        let scalar = e
            .conditional_probability(&Event::value(2, 4), &Event::value(1, 2))
            .unwrap();
        let listed = e
            .conditional_probability(&Event::new(2, vec![4]), &Event::new(1, vec![2]))
            .unwrap();
        assert_eq!(scalar, listed);
    }

    #[test]
    fn same_index_events_intersect() {
        let e = small();
        let p = e
            .joint_probability(&Event::any_of(1, [2, 3]), &Event::any_of(1, [3, 4]))
            .unwrap();
        assert_abs_diff_eq!(p, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn pmf_agrees_with_events_on_signed_zeros() {
        let e: Ensemble<f64> = Ensemble::new(vec![
            vec![1.0, -1.0, -0.0].into(),
            vec![1.0, 0.0, 0.0].into(),
            vec![1.0, 0.0, -0.0].into(),
            vec![1.0, -1.0, 1.0].into(),
        ])
        .unwrap();
        let pmf = e.pmf(2).unwrap();
        let joint = e
            .joint_probability(&Event::value(2, 0.0), &Event::value(0, 1.0))
            .unwrap();
        assert_eq!(pmf.len(), 2);
        assert_abs_diff_eq!(pmf.get(0.0).unwrap(), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(pmf.get(0.0).unwrap(), joint, epsilon = 1e-12);
    }
}
