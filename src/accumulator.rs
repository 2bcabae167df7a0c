use std::mem;
use log::Level;

use {ErrorKind, Result};
use distributed::{self, Outcome, Role};
use evaluate::evaluate;
use quantile::Quantile;
use sample::SampleSet;
use value::{Number, Value};

/// Per-execution state of a `percentile(<field>, <quantile>)` aggregation.
///
/// The accumulator collects the numeric samples of the rows it observes and
/// remembers the quantile supplied with the first row. Quantile arguments of
/// later rows are ignored even if they differ.
///
/// An accumulator is meant to be owned by a single execution context (or a
/// single distributed node); give each context its own instance.
///
/// # Examples
///
/// ```
/// use percentile::{PercentileAccumulator, Role, Outcome};
/// use percentile::value::{Number, Value};
///
/// let mut acc = PercentileAccumulator::new();
/// for v in &[Value::Integer(3), Value::Null, Value::Integer(7), Value::Integer(5)] {
///     acc.observe(v, &Value::Float(0.5)).unwrap();
/// }
/// assert_eq!(acc.len(), 3);
/// assert_eq!(acc.finalize(Role::Coordinator), Outcome::Final(Some(Number::Float(5.0))));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PercentileAccumulator {
    quantile: Option<Quantile>,
    samples: SampleSet,
}
impl PercentileAccumulator {
    /// Makes a new empty accumulator whose quantile is not fixed yet.
    ///
    /// Use `AccumulatorBuilder` for other settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fixed quantile, or `None` if no row has been observed yet.
    pub fn quantile(&self) -> Option<Quantile> {
        self.quantile
    }

    /// Returns the accumulated samples.
    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Returns the number of accumulated samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been accumulated, otherwise `false`.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns `true` because partial results of this aggregation can be merged.
    pub fn is_distributable(&self) -> bool {
        true
    }

    /// Fixes the quantile unless it has already been fixed.
    ///
    /// Once fixed, `arg` is ignored; a differing quantile is only reported by a warning log.
    ///
    /// # Errors
    ///
    /// See `Quantile::parse`.
    pub fn fix_quantile(&mut self, arg: &Value) -> Result<Quantile> {
        if let Some(quantile) = self.quantile {
            if log_enabled!(Level::Warn)
                && Quantile::parse(arg).ok().map_or(false, |q| q != quantile)
            {
                warn!(
                    "Ignored quantile argument {} (the quantile is fixed to {})",
                    arg, quantile
                );
            }
            return Ok(quantile);
        }
        let quantile = track!(Quantile::parse(arg))?;
        debug!("Quantile fixed to {}", quantile);
        self.quantile = Some(quantile);
        Ok(quantile)
    }

    /// Observes a row.
    ///
    /// `input` is handled as follows:
    ///
    /// - a number is added as a sample,
    /// - each non-null element of a collection (list or map) is added as a sample,
    /// - anything else (including null) is ignored.
    ///
    /// # Errors
    ///
    /// - If this is the first observation and `quantile_arg` is not a quantile,
    ///   `ErrorKind::InvalidInput` will be returned and no sample is added.
    /// - If a collection contains a non-null, non-numeric element,
    ///   `ErrorKind::TypeMismatch` will be returned.
    ///   The elements preceding it have already been added at that time.
    pub fn observe(&mut self, input: &Value, quantile_arg: &Value) -> Result<()> {
        track!(self.fix_quantile(quantile_arg))?;
        if let Some(n) = input.as_number() {
            self.samples.push(n);
        } else if let Some(elements) = input.elements() {
            for e in elements {
                if e.is_null() {
                    continue;
                }
                let n = match e.as_number() {
                    Some(n) => n,
                    None => track_panic!(ErrorKind::TypeMismatch, "Non-numeric element: {}", e),
                };
                self.samples.push(n);
            }
        }
        Ok(())
    }

    /// Evaluates the percentile of the samples accumulated so far.
    ///
    /// Returns `None` if there are no samples.
    pub fn evaluate(&self) -> Option<Number> {
        // Samples exist only after the quantile has been fixed.
        self.quantile
            .and_then(|quantile| evaluate(self.samples.as_slice(), quantile))
    }

    /// Finalizes this aggregation.
    ///
    /// A producer hands over its raw samples, while a coordinator evaluates the percentile.
    pub fn finalize(self, role: Role) -> Outcome {
        match role {
            Role::Producer => {
                debug!("Handing over {} samples as a partial result", self.samples.len());
                Outcome::Partial(self.samples)
            }
            Role::Coordinator => {
                let value = self.evaluate();
                Outcome::Final(value)
            }
        }
    }

    /// Merges the partial results of all participants, including this one if
    /// the caller passes its samples, and evaluates the percentile.
    ///
    /// The quantile fixed on this accumulator is used for the evaluation.
    ///
    /// # Errors
    ///
    /// If the combined samples are not empty and the quantile has not been fixed,
    /// `ErrorKind::InvalidInput` will be returned.
    pub fn merge_participant_results<I>(&self, partials: I) -> Result<Option<Number>>
    where
        I: IntoIterator<Item = SampleSet>,
    {
        track!(distributed::merge(partials, self.quantile))
    }

    /// Same as `merge_participant_results` but accepts partial results in the `Value` form.
    ///
    /// # Errors
    ///
    /// In addition to the errors of `merge_participant_results`, `ErrorKind::TypeMismatch`
    /// will be returned if any of `partials` is not a list of numbers.
    pub fn merge_participant_values(&self, partials: &[Value]) -> Result<Option<Number>> {
        track!(distributed::merge_values(partials, self.quantile))
    }

    /// Moves the samples out into a new accumulator, leaving the fixed quantile in place.
    pub(crate) fn take(&mut self) -> Self {
        PercentileAccumulator {
            quantile: self.quantile,
            samples: mem::replace(&mut self.samples, SampleSet::new()),
        }
    }
}

/// `PercentileAccumulator` builder.
#[derive(Debug, Clone, Default)]
pub struct AccumulatorBuilder {
    quantile: Option<f64>,
    capacity: usize,
}
impl AccumulatorBuilder {
    /// Makes a new `AccumulatorBuilder` with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the quantile in advance.
    ///
    /// Quantile arguments of observed rows are then ignored.
    /// This is useful for a coordinator that has no local rows.
    pub fn quantile(&mut self, quantile: f64) -> &mut Self {
        self.quantile = Some(quantile);
        self
    }

    /// Sets the number of samples the accumulator can hold without reallocation.
    ///
    /// The default value is `0`.
    pub fn capacity(&mut self, capacity: usize) -> &mut Self {
        self.capacity = capacity;
        self
    }

    /// Builds an accumulator.
    ///
    /// # Errors
    ///
    /// If the preset quantile is NaN, this method returns `ErrorKind::InvalidInput` error.
    pub fn finish(&self) -> Result<PercentileAccumulator> {
        let quantile = if let Some(q) = self.quantile {
            Some(track!(Quantile::new(q))?)
        } else {
            None
        };
        Ok(PercentileAccumulator {
            quantile,
            samples: SampleSet::with_capacity(self.capacity),
        })
    }
}
