//! Empirical probability mass functions.

use stochsim_chain::State;

/// Relative frequencies of the values observed at one time index.
///
/// Entries are sorted by ascending value. Each probability is
/// `count / n_episodes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<S> {
    entries: Vec<(S, f64)>,
}

impl<S: State> Pmf<S> {
    /// Tallies a column of observed values.
    ///
    /// Equal values are grouped exactly; no binning or rounding is applied.
    /// An empty column yields an empty PMF.
    pub fn from_samples(samples: &[S]) -> Self {
        if samples.is_empty() {
            return Self {
                entries: Vec::new(),
            };
        }
        let n = samples.len() as f64;
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_order(b));

        let mut entries = Vec::new();
        let mut current = sorted[0];
        let mut count = 0usize;
        for &v in &sorted {
            if v.total_order(&current).is_eq() {
                count += 1;
            } else {
                entries.push((current, count as f64 / n));
                current = v;
                count = 1;
            }
        }
        entries.push((current, count as f64 / n));
        Self { entries }
    }

    /// Returns the number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no value was observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(value, probability)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (S, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns the `(value, probability)` pairs.
    pub fn entries(&self) -> &[(S, f64)] {
        &self.entries
    }

    /// Returns the probability of `value`, or `None` if it was never observed.
    pub fn get(&self, value: S) -> Option<f64> {
        self.entries
            .binary_search_by(|(v, _)| v.total_order(&value))
            .ok()
            .map(|i| self.entries[i].1)
    }

    /// Sum of all probabilities; 1 up to rounding for a non-empty PMF.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|&(_, p)| p).sum()
    }

    /// `sum(value * p)`.
    pub fn expected_value(&self) -> f64 {
        self.entries.iter().map(|&(v, p)| v.as_f64() * p).sum()
    }

    /// `sum(p * (value - mean)^2)`, the population variance.
    pub fn variance(&self) -> f64 {
        let mean = self.expected_value();
        self.entries
            .iter()
            .map(|&(v, p)| {
                let dev = v.as_f64() - mean;
                p * dev * dev
            })
            .sum()
    }

    /// Square root of [`Pmf::variance`].
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}
