//! Sample set.
use std::slice;
use std::vec;

use {ErrorKind, Result};
use value::{Number, Value};

/// An unordered multiset of numeric samples.
///
/// Nulls are never stored in this set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet(Vec<Number>);
impl SampleSet {
    /// Makes an empty sample set.
    pub fn new() -> Self {
        SampleSet(Vec::new())
    }

    /// Makes an empty sample set which can hold `capacity` samples without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        SampleSet(Vec::with_capacity(capacity))
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this set has no samples, otherwise `false`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the samples in insertion order.
    pub fn iter(&self) -> slice::Iter<Number> {
        self.0.iter()
    }

    /// Returns the samples as a slice.
    pub fn as_slice(&self) -> &[Number] {
        &self.0
    }

    /// Adds a sample.
    pub fn push(&mut self, sample: Number) {
        self.0.push(sample);
    }

    /// Adds every sample of `other` to this set.
    pub fn append(&mut self, other: SampleSet) {
        self.0.extend(other.0);
    }

    /// Consumes the `SampleSet` and returns the underlying vector.
    pub fn into_vec(self) -> Vec<Number> {
        self.0
    }

    /// Converts this set into the `Value` form handed to the aggregation framework.
    pub fn into_value(self) -> Value {
        Value::List(self.0.into_iter().map(Value::from).collect())
    }

    /// Restores a sample set from a partial result received from another node.
    ///
    /// # Errors
    ///
    /// If `value` is not a list consisting only of numbers,
    /// this function returns `ErrorKind::TypeMismatch` error.
    pub fn from_partial(value: &Value) -> Result<Self> {
        if let Value::List(ref elements) = *value {
            let samples = track!(
                elements
                    .iter()
                    .map(|e| -> Result<Number> {
                        match e.as_number() {
                            Some(n) => Ok(n),
                            None => track_panic!(ErrorKind::TypeMismatch, "Non-numeric sample: {}", e),
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            )?;
            Ok(SampleSet(samples))
        } else {
            track_panic!(ErrorKind::TypeMismatch, "Not a sample set: {}", value)
        }
    }
}
impl From<Vec<Number>> for SampleSet {
    fn from(f: Vec<Number>) -> Self {
        SampleSet(f)
    }
}
impl Extend<Number> for SampleSet {
    fn extend<T: IntoIterator<Item = Number>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
impl IntoIterator for SampleSet {
    type Item = Number;
    type IntoIter = vec::IntoIter<Number>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Number;
    type IntoIter = slice::Iter<'a, Number>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
