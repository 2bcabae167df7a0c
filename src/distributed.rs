//! Two-phase (local-then-merged) evaluation.
//!
//! Each producing node hands over its raw, unreduced sample set, and the
//! coordinator concatenates them before running the one and only
//! sort-and-interpolate step. The merged result is therefore exact and equal to
//! the result of accumulating every sample on a single node.
use {ErrorKind, Result};
use evaluate::evaluate_owned;
use quantile::Quantile;
use sample::SampleSet;
use value::{Number, Value};

/// The role of an execution context in a (possibly distributed) aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A leaf node whose result will be merged by a coordinator.
    Producer,

    /// The final consumer; a single node, or the coordinator after collecting the partials.
    Coordinator,
}

/// The result of finalizing an accumulator.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The raw sample set of a producer.
    Partial(SampleSet),

    /// The percentile computed by a coordinator (`None` if there were no samples).
    Final(Option<Number>),
}
impl Outcome {
    /// Converts this outcome into the `Value` form handed to the aggregation framework.
    ///
    /// A partial result becomes a list of numbers and a missing final value becomes `Value::Null`.
    pub fn into_value(self) -> Value {
        match self {
            Outcome::Partial(samples) => samples.into_value(),
            Outcome::Final(value) => Value::from(value),
        }
    }
}

/// Concatenates the sample sets of all participants and evaluates the combined set.
///
/// `quantile` may be `None` only if every partial is empty.
pub fn merge<I>(partials: I, quantile: Option<Quantile>) -> Result<Option<Number>>
where
    I: IntoIterator<Item = SampleSet>,
{
    let mut combined = SampleSet::new();
    let mut participants = 0;
    for partial in partials {
        combined.append(partial);
        participants += 1;
    }
    debug!(
        "Merging {} samples from {} participants",
        combined.len(),
        participants
    );
    if combined.is_empty() {
        return Ok(None);
    }

    if let Some(quantile) = quantile {
        Ok(evaluate_owned(combined.into_vec(), quantile))
    } else {
        track_panic!(ErrorKind::InvalidInput, "The quantile has not been fixed")
    }
}

/// Same as `merge` but accepts partial results in the `Value` form.
///
/// # Errors
///
/// If any of `partials` is not a list of numbers, this function returns
/// `ErrorKind::TypeMismatch` error.
pub fn merge_values(partials: &[Value], quantile: Option<Quantile>) -> Result<Option<Number>> {
    let partials = track!(
        partials
            .iter()
            .map(|p| track!(SampleSet::from_partial(p)))
            .collect::<Result<Vec<_>>>()
    )?;
    track!(merge(partials, quantile))
}

#[cfg(test)]
mod test {
    use super::*;

    fn q(quantile: f64) -> Option<Quantile> {
        Some(track_try_unwrap!(Quantile::new(quantile)))
    }

    fn samples(values: &[i64]) -> SampleSet {
        values.iter().cloned().map(Number::Integer).collect::<Vec<_>>().into()
    }

    #[test]
    fn merge_works() {
        let partials = vec![samples(&[7, 1, 4]), samples(&[]), samples(&[10, 2, 9, 3, 8, 6, 5])];
        let value = track_try_unwrap!(merge(partials, q(0.5)));
        assert_eq!(value, Some(Number::Float(5.5)));
    }

    #[test]
    fn merge_of_any_partition_equals_direct_evaluation() {
        let all = [12, 5, 5, 40, -3, 8, 0, 21, 17, 9, 1];
        for quantile in &[0.0, 0.1, 0.33, 0.5, 0.75, 0.9, 1.0] {
            let direct = track_try_unwrap!(merge(vec![samples(&all)], q(*quantile)));
            for i in 0..all.len() + 1 {
                let (left, right) = all.split_at(i);
                let merged = track_try_unwrap!(merge(
                    vec![samples(right), samples(left)],
                    q(*quantile)
                ));
                assert_eq!(merged, direct, "q={} split={}", quantile, i);
            }
        }
    }

    #[test]
    fn merge_without_samples_has_no_value() {
        assert_eq!(track_try_unwrap!(merge(Vec::<SampleSet>::new(), None)), None);
        assert_eq!(
            track_try_unwrap!(merge(vec![samples(&[]), samples(&[])], None)),
            None
        );
    }

    #[test]
    fn merge_requires_fixed_quantile() {
        assert_eq!(
            merge(vec![samples(&[1])], None).err().map(|e| *e.kind()),
            Some(ErrorKind::InvalidInput)
        );
    }

    #[test]
    fn merge_values_works() {
        let partials = vec![
            Value::List(vec![Value::Integer(10), Value::Float(30.0)]),
            Value::List(vec![Value::Integer(20)]),
        ];
        let value = track_try_unwrap!(merge_values(&partials, q(0.25)));
        assert_eq!(value, Some(Number::Float(10.0)));

        let partials = vec![Value::List(vec![Value::Integer(10)]), Value::Integer(20)];
        assert_eq!(
            merge_values(&partials, q(0.25)).err().map(|e| *e.kind()),
            Some(ErrorKind::TypeMismatch)
        );
    }

    #[test]
    fn outcome_into_value_works() {
        assert_eq!(Outcome::Final(None).into_value(), Value::Null);
        assert_eq!(
            Outcome::Final(Some(Number::Float(1.5))).into_value(),
            Value::Float(1.5)
        );
        assert_eq!(
            Outcome::Partial(samples(&[2, 1])).into_value(),
            Value::List(vec![Value::Integer(2), Value::Integer(1)])
        );
    }
}
