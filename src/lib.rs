//! Distributable interpolated percentile aggregate for query engines.
//!
//! `percentile(<field>, <quantile>)` collects the numeric values of a field,
//! sorts them and locates the rank position `quantile * (n + 1)` among them,
//! blending the two bracketing values linearly.
//!
//! The computation is split into two phases so that it can run across many
//! execution nodes: each producer hands over its raw samples
//! ([`Role::Producer`]), and a coordinator concatenates them and evaluates
//! the percentile once ([`Role::Coordinator`]). Because no approximation is
//! involved, the merged result equals the single-node result.
//!
//! # Examples
//!
//! ```
//! use percentile::{Outcome, PercentileAccumulator, Role};
//! use percentile::value::{Number, Value};
//!
//! let mut producers = vec![PercentileAccumulator::new(), PercentileAccumulator::new()];
//! for i in 1..11 {
//!     let producer = &mut producers[i as usize % 2];
//!     producer.observe(&Value::Integer(i), &Value::from("0.5")).unwrap();
//! }
//!
//! let partials = producers
//!     .into_iter()
//!     .map(|p| match p.finalize(Role::Producer) {
//!         Outcome::Partial(samples) => samples,
//!         Outcome::Final(_) => unreachable!(),
//!     })
//!     .collect::<Vec<_>>();
//!
//! let mut coordinator = PercentileAccumulator::new();
//! coordinator.fix_quantile(&Value::from("0.5")).unwrap();
//! let median = coordinator.merge_participant_results(partials).unwrap();
//! assert_eq!(median, Some(Number::Float(5.5)));
//! ```
//!
//! [`Role::Producer`]: ./enum.Role.html#variant.Producer
//! [`Role::Coordinator`]: ./enum.Role.html#variant.Coordinator
#![warn(missing_docs)]
extern crate atomic_immut;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate trackable;

pub use accumulator::{AccumulatorBuilder, PercentileAccumulator};
pub use distributed::{Outcome, Role};
pub use error::{Error, ErrorKind};
pub use evaluate::evaluate;
pub use function::{Accumulate, AggregateFunction, Percentile};
pub use registry::{default_registry, FunctionRegistry};

pub mod distributed;
pub mod quantile;
pub mod sample;
pub mod value;

mod accumulator;
mod error;
mod evaluate;
mod function;
mod registry;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
