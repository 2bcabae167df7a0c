//! Aggregate function descriptors and the accumulator interface seen by the aggregation framework.
use std::fmt;

use {ErrorKind, Result};
use accumulator::PercentileAccumulator;
use distributed::Role;
use value::Value;

/// The interface through which the aggregation framework drives an accumulator.
///
/// Arguments and results are exchanged in the `Value` form.
pub trait Accumulate: fmt::Debug + Send {
    /// Observes the arguments of a row.
    fn observe(&mut self, args: &[Value]) -> Result<()>;

    /// Returns `true` if partial results of this accumulator can be merged.
    fn is_distributable(&self) -> bool;

    /// Finalizes the accumulator as `role`.
    ///
    /// The accumulated samples are consumed; the fixed quantile is kept so that a
    /// coordinator can hand its own samples over and then `merge` them with the others.
    fn finalize(&mut self, role: Role) -> Result<Value>;

    /// Merges the partial results produced by the participants of a distributed aggregation.
    fn merge(&self, partials: &[Value]) -> Result<Value>;
}

/// An aggregate function.
pub trait AggregateFunction: fmt::Debug + Send + Sync {
    /// Returns the name of this function.
    fn name(&self) -> &str;

    /// Returns the minimum number of parameters.
    fn min_params(&self) -> usize;

    /// Returns the maximum number of parameters.
    fn max_params(&self) -> usize;

    /// Returns the usage of this function (e.g., `"percentile(<field>, <quantile>)"`).
    fn syntax(&self) -> String;

    /// Returns `true` if this function aggregates the values of many rows into one result.
    fn aggregate_results(&self) -> bool;

    /// Makes a fresh accumulator for an execution context.
    fn create_accumulator(&self) -> Box<Accumulate>;

    /// Checks the number of the given arguments.
    fn check_arity(&self, args: &[Value]) -> Result<()> {
        track_assert!(
            self.min_params() <= args.len() && args.len() <= self.max_params(),
            ErrorKind::InvalidInput,
            "{} takes {}..={} arguments, but {} given; usage: {}",
            self.name(),
            self.min_params(),
            self.max_params(),
            args.len(),
            self.syntax()
        );
        Ok(())
    }
}

/// The `percentile(<field>, <quantile>)` aggregate function.
///
/// Nulls are ignored in the calculation.
///
/// # Examples
///
/// ```
/// use percentile::{AggregateFunction, Percentile, Role};
/// use percentile::value::Value;
///
/// let function = Percentile;
/// assert_eq!(function.syntax(), "percentile(<field>, <quantile>)");
///
/// let mut acc = function.create_accumulator();
/// for v in vec![Value::Integer(10), Value::Integer(20), Value::Integer(30)] {
///     acc.observe(&[v, Value::Float(0.25)]).unwrap();
/// }
/// assert_eq!(acc.finalize(Role::Coordinator).unwrap(), Value::Float(10.0));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Percentile;
impl Percentile {
    /// The name of this function.
    pub const NAME: &'static str = "percentile";
}
impl AggregateFunction for Percentile {
    fn name(&self) -> &str {
        Self::NAME
    }
    fn min_params(&self) -> usize {
        2
    }
    fn max_params(&self) -> usize {
        2
    }
    fn syntax(&self) -> String {
        format!("{}(<field>, <quantile>)", Self::NAME)
    }
    fn aggregate_results(&self) -> bool {
        true
    }
    fn create_accumulator(&self) -> Box<Accumulate> {
        Box::new(PercentileAccumulator::new())
    }
}

impl Accumulate for PercentileAccumulator {
    fn observe(&mut self, args: &[Value]) -> Result<()> {
        track!(Percentile.check_arity(args))?;
        track!(PercentileAccumulator::observe(self, &args[0], &args[1]))
    }
    fn is_distributable(&self) -> bool {
        PercentileAccumulator::is_distributable(self)
    }
    fn finalize(&mut self, role: Role) -> Result<Value> {
        Ok(self.take().finalize(role).into_value())
    }
    fn merge(&self, partials: &[Value]) -> Result<Value> {
        let value = track!(self.merge_participant_values(partials))?;
        Ok(Value::from(value))
    }
}
