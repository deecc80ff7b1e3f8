//! Events over a single time index: "the state at time `n` is one of these values".

use stochsim_chain::State;

/// One or more admissible values for an event.
///
/// A single value converts into a singleton set, so `ValueSet::from(2)` and
/// `ValueSet::from(vec![2])` describe the same event.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet<S> {
    values: Vec<S>,
}

impl<S: State> ValueSet<S> {
    /// Returns `true` if `value` is one of the admissible values.
    pub fn contains(&self, value: S) -> bool {
        self.values.iter().any(|&v| v == value)
    }

    /// Returns the admissible values.
    pub fn values(&self) -> &[S] {
        &self.values
    }

    /// Returns `true` if no value is admissible.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: State> From<S> for ValueSet<S> {
    fn from(value: S) -> Self {
        Self {
            values: vec![value],
        }
    }
}

impl<S: State> From<Vec<S>> for ValueSet<S> {
    fn from(values: Vec<S>) -> Self {
        Self { values }
    }
}

impl<S: State> From<&[S]> for ValueSet<S> {
    fn from(values: &[S]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<S: State, const N: usize> From<[S; N]> for ValueSet<S> {
    fn from(values: [S; N]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }
}

impl<S: State> FromIterator<S> for ValueSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The event "state at time `index` is in `values`".
#[derive(Debug, Clone, PartialEq)]
pub struct Event<S> {
    index: usize,
    values: ValueSet<S>,
}

impl<S: State> Event<S> {
    /// Builds an event from anything convertible into a [`ValueSet`].
    pub fn new(index: usize, values: impl Into<ValueSet<S>>) -> Self {
        Self {
            index,
            values: values.into(),
        }
    }

    /// The event "state at `index` equals `value`".
    pub fn value(index: usize, value: S) -> Self {
        Self::new(index, value)
    }

    /// The event "state at `index` is any of `values`".
    pub fn any_of(index: usize, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            index,
            values: values.into_iter().collect(),
        }
    }

    /// Returns the time index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the admissible values.
    pub fn values(&self) -> &ValueSet<S> {
        &self.values
    }

    /// Returns `true` if the state at this event's index is admissible.
    ///
    /// # Panics
    ///
    /// Panics if `states` is shorter than `index + 1`.
    pub(crate) fn matches(&self, states: &[S]) -> bool {
        self.values.contains(states[self.index])
    }
}
