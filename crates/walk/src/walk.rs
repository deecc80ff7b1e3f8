//! The random walk and its excursion bookkeeping.

use tracing::trace;

use crate::config::WalkConfig;
use crate::error::WalkError;
use crate::result::ReturnTimes;

/// A +1/-1 walk on the integers that restarts each time it returns to `x0`.
///
/// Only the current excursion's path is kept; completed excursions leave
/// behind their length (the return time) and the running average of all
/// return times so far.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    config: WalkConfig,
    x: i64,
    t: usize,
    history: Vec<i64>,
    return_times: Vec<usize>,
    cumulative_average: Vec<f64>,
    total_return_time: usize,
}

impl RandomWalk {
    /// Creates a walk at its start position.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError`] if the configuration is invalid.
    pub fn new(config: WalkConfig) -> Result<Self, WalkError> {
        config.validate()?;
        let x0 = config.x0();
        Ok(Self {
            config,
            x: x0,
            t: 0,
            history: vec![x0],
            return_times: Vec::new(),
            cumulative_average: Vec::new(),
            total_return_time: 0,
        })
    }

    /// Takes one step: +1 with probability `p`, otherwise -1.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::PositionOverflow`] if the step leaves the range
    /// of `i64`; the walk is left unchanged.
    pub fn step(&mut self, rng: &mut impl rand::Rng) -> Result<(), WalkError> {
        let delta = if rng.random_bool(self.config.p()) { 1 } else { -1 };
        self.x = self
            .x
            .checked_add(delta)
            .ok_or(WalkError::PositionOverflow { position: self.x })?;
        self.t += 1;
        self.history.push(self.x);
        Ok(())
    }

    /// Records a return if the walk is back at its start, then restarts the
    /// excursion.
    ///
    /// Returns the completed return time, or `None` if the walk is elsewhere
    /// (or has not moved yet).
    pub fn check_return(&mut self) -> Option<usize> {
        if self.t == 0 || self.x != self.config.x0() {
            return None;
        }
        let t = self.t;
        self.return_times.push(t);
        self.total_return_time += t;
        self.cumulative_average
            .push(self.total_return_time as f64 / self.return_times.len() as f64);
        trace!(return_time = t, n_returns = self.return_times.len(), "returned to start");
        self.reset();
        Some(t)
    }

    /// Moves back to the start and clears the current excursion.
    ///
    /// Recorded return times are kept.
    pub fn reset(&mut self) {
        self.x = self.config.x0();
        self.t = 0;
        self.history.clear();
        self.history.push(self.x);
    }

    /// Returns the current position.
    pub fn position(&self) -> i64 {
        self.x
    }

    /// Returns the number of steps in the current excursion.
    pub fn time(&self) -> usize {
        self.t
    }

    /// Returns the positions visited in the current excursion, start included.
    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// Returns all recorded return times.
    pub fn return_times(&self) -> &[usize] {
        &self.return_times
    }

    /// Returns the running average of return times after each return.
    pub fn cumulative_average(&self) -> &[f64] {
        &self.cumulative_average
    }

    /// Returns the configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Consumes the walk into its return-time summary.
    pub fn into_return_times(self, n_steps: usize) -> ReturnTimes {
        ReturnTimes::new(
            self.return_times,
            self.cumulative_average,
            n_steps,
            self.t,
        )
    }
}

/// Runs a walk for `n_steps`, checking for a return after every step.
///
/// # Errors
///
/// Returns [`WalkError`] if the configuration is invalid or the walk runs
/// off the range of `i64`.
#[tracing::instrument(skip(config, rng))]
pub fn estimate_return_times(
    config: &WalkConfig,
    n_steps: usize,
    rng: &mut impl rand::Rng,
) -> Result<ReturnTimes, WalkError> {
    let mut walk = RandomWalk::new(config.clone())?;
    for _ in 0..n_steps {
        walk.step(rng)?;
        walk.check_return();
    }
    Ok(walk.into_return_times(n_steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn starts_at_x0() {
        let walk = RandomWalk::new(WalkConfig::new().with_start(4)).unwrap();
        assert_eq!(walk.position(), 4);
        assert_eq!(walk.time(), 0);
        assert_eq!(walk.history(), &[4]);
        assert!(walk.return_times().is_empty());
    }

    #[test]
    fn invalid_config_rejected() {
        assert!(RandomWalk::new(WalkConfig::new().with_probabilities(0.7, 0.7)).is_err());
    }

    #[test]
    fn always_right_never_returns() {
        let mut walk = RandomWalk::new(WalkConfig::new().with_probabilities(1.0, 0.0)).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for i in 1..=20 {
            walk.step(&mut rng).unwrap();
            assert_eq!(walk.check_return(), None);
            assert_eq!(walk.position(), i);
        }
        assert_eq!(walk.history().len(), 21);
    }

    #[test]
    fn step_past_i64_max_errors() {
        let cfg = WalkConfig::new()
            .with_probabilities(1.0, 0.0)
            .with_start(i64::MAX);
        let mut walk = RandomWalk::new(cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            walk.step(&mut rng),
            Err(WalkError::PositionOverflow { position: i64::MAX })
        ));
        assert_eq!(walk.position(), i64::MAX);
        assert_eq!(walk.time(), 0);
        assert_eq!(walk.history(), &[i64::MAX]);
    }

    #[test]
    fn no_return_before_moving() {
        let mut walk = RandomWalk::new(WalkConfig::new()).unwrap();
        assert_eq!(walk.check_return(), None);
    }

    #[test]
    fn return_resets_excursion() {
        let mut walk = RandomWalk::new(WalkConfig::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let t = loop {
            walk.step(&mut rng).unwrap();
            if let Some(t) = walk.check_return() {
                break t;
            }
        };
        assert!(t >= 2 && t % 2 == 0, "return time {t} must be even and positive");
        assert_eq!(walk.position(), 0);
        assert_eq!(walk.time(), 0);
        assert_eq!(walk.history(), &[0]);
        assert_eq!(walk.return_times(), &[t]);
        assert_eq!(walk.cumulative_average(), &[t as f64]);
    }

    #[test]
    fn estimate_matches_manual_loop() {
        let cfg = WalkConfig::new();
        let result = estimate_return_times(&cfg, 5_000, &mut StdRng::seed_from_u64(7)).unwrap();

        let mut walk = RandomWalk::new(cfg).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..5_000 {
            walk.step(&mut rng).unwrap();
            walk.check_return();
        }
        assert_eq!(result.return_times(), walk.return_times());
        assert_eq!(result.open_excursion(), walk.time());
    }
}
