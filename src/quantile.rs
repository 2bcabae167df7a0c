//! Quantile argument.
use std::fmt;

use {ErrorKind, Result};
use value::Value;

/// The fraction identifying the requested percentile (e.g., `0.5` for the median).
///
/// No range check is applied: values outside of `[0, 1]` simply hit the
/// minimum or maximum clamp during evaluation. Only NaN is rejected because it
/// has no rank position.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Quantile(f64);
impl Quantile {
    /// Makes a new `Quantile` instance.
    ///
    /// # Errors
    ///
    /// If `quantile` is NaN, this function returns `ErrorKind::InvalidInput` error.
    pub fn new(quantile: f64) -> Result<Self> {
        track_assert!(!quantile.is_nan(), ErrorKind::InvalidInput, "quantile:{}", quantile);
        Ok(Quantile(quantile))
    }

    /// Parses a quantile argument given by the aggregation framework.
    ///
    /// Numbers are taken as they are and text is parsed as a float.
    ///
    /// # Errors
    ///
    /// Any other value, text that is not a float, or NaN results in `ErrorKind::InvalidInput`.
    ///
    /// # Examples
    ///
    /// ```
    /// use percentile::ErrorKind;
    /// use percentile::quantile::Quantile;
    /// use percentile::value::Value;
    ///
    /// assert_eq!(Quantile::parse(&Value::Float(0.5)).ok().map(|q| q.as_f64()), Some(0.5));
    /// assert_eq!(Quantile::parse(&Value::from(" 0.95 ")).ok().map(|q| q.as_f64()), Some(0.95));
    /// assert_eq!(Quantile::parse(&Value::from("median")).err().map(|e| *e.kind()),
    ///            Some(ErrorKind::InvalidInput));
    /// ```
    pub fn parse(arg: &Value) -> Result<Self> {
        match *arg {
            Value::Text(ref s) => {
                let quantile = track!(s.trim().parse::<f64>().map_err(::Error::from), "{:?}", s)?;
                track!(Quantile::new(quantile))
            }
            _ => {
                if let Some(n) = arg.as_number() {
                    track!(Quantile::new(n.as_f64()))
                } else {
                    track_panic!(ErrorKind::InvalidInput, "Not a quantile: {}", arg)
                }
            }
        }
    }

    /// Returns the `f64` representation of this quantile.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}
impl fmt::Display for Quantile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_works() {
        let q = track_try_unwrap!(Quantile::parse(&Value::Integer(1)));
        assert_eq!(q.as_f64(), 1.0);

        let q = track_try_unwrap!(Quantile::parse(&Value::from("1e-1")));
        assert_eq!(q.as_f64(), 0.1);

        // Out of range values are accepted as-is.
        let q = track_try_unwrap!(Quantile::parse(&Value::Float(-3.0)));
        assert_eq!(q.as_f64(), -3.0);

        for arg in &[
            Value::Null,
            Value::from("NaN"),
            Value::Float(::std::f64::NAN),
            Value::Boolean(true),
            Value::from("0.5x"),
            Value::from(vec![0.5]),
        ] {
            assert_eq!(
                Quantile::parse(arg).err().map(|e| *e.kind()),
                Some(ErrorKind::InvalidInput)
            );
        }
    }
}
