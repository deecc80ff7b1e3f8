//! Result type for return-time estimation.

/// Return times collected over a fixed number of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTimes {
    return_times: Vec<usize>,
    cumulative_average: Vec<f64>,
    n_steps: usize,
    open_excursion: usize,
}

impl ReturnTimes {
    /// Creates a new result.
    pub fn new(
        return_times: Vec<usize>,
        cumulative_average: Vec<f64>,
        n_steps: usize,
        open_excursion: usize,
    ) -> Self {
        Self {
            return_times,
            cumulative_average,
            n_steps,
            open_excursion,
        }
    }

    /// Returns every completed return time in order.
    pub fn return_times(&self) -> &[usize] {
        &self.return_times
    }

    /// Returns the running average after each return.
    pub fn cumulative_average(&self) -> &[f64] {
        &self.cumulative_average
    }

    /// Returns the number of completed returns.
    pub fn n_returns(&self) -> usize {
        self.return_times.len()
    }

    /// Returns the total number of steps simulated.
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the length of the excursion still in progress when the run ended.
    pub fn open_excursion(&self) -> usize {
        self.open_excursion
    }

    /// Mean of the completed return times; 0.0 if there were none.
    pub fn mean(&self) -> f64 {
        let times: Vec<f64> = self.return_times.iter().map(|&t| t as f64).collect();
        stochsim_stats::mean(&times)
    }
}
