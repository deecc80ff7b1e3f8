//! State values a trajectory can hold.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A value observed at one time step of a trajectory.
///
/// States are plain values: equality decides event membership and PMF
/// tallies, `total_order` decides PMF key order, and `as_f64` feeds the
/// moment computations.
pub trait State: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Total ordering used to sort PMF keys.
    fn total_order(&self, other: &Self) -> Ordering;

    /// The state as a real number.
    fn as_f64(self) -> f64;
}

/// Categorical states are 1-indexed labels in `1..=K`.
impl State for u32 {
    fn total_order(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Multiplicative states compare exactly; no rounding is applied before
/// tallying. `-0.0` and `0.0` order as equal so PMF grouping agrees with `==`.
impl State for f64 {
    fn total_order(&self, other: &Self) -> Ordering {
        zero_to_positive(*self).total_cmp(&zero_to_positive(*other))
    }

    fn as_f64(self) -> f64 {
        self
    }
}

fn zero_to_positive(x: f64) -> f64 {
    if x == 0.0 { 0.0 } else { x }
}
