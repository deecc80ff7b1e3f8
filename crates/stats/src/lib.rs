//! Statistical helper functions for the stochsim workspace.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator.
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Running mean: element `i` is the mean of `data[..=i]`.
pub fn cumulative_mean(data: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    data.iter()
        .enumerate()
        .map(|(i, &x)| {
            sum += x;
            sum / (i + 1) as f64
        })
        .collect()
}
