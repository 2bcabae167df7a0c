//! Values exchanged with the surrounding aggregation framework.
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed cell passed in by the aggregation framework.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}
impl Value {
    /// Returns `true` if this is `Value::Null`.
    pub fn is_null(&self) -> bool {
        match *self {
            Value::Null => true,
            _ => false,
        }
    }

    /// Returns the number held by this value, if it is numeric.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Value::Integer(v) => Some(Number::Integer(v)),
            Value::Float(v) => Some(Number::Float(v)),
            _ => None,
        }
    }

    /// Returns an iterator over the elements if this value is a collection.
    ///
    /// Maps yield their values in key order.
    pub fn elements(&self) -> Option<Elements> {
        match *self {
            Value::List(ref v) => Some(Elements::List(v.iter())),
            Value::Map(ref v) => Some(Elements::Map(v.values())),
            _ => None,
        }
    }
}
impl From<Number> for Value {
    fn from(f: Number) -> Self {
        match f {
            Number::Integer(v) => Value::Integer(v),
            Number::Float(v) => Value::Float(v),
        }
    }
}
impl From<Option<Number>> for Value {
    fn from(f: Option<Number>) -> Self {
        f.map_or(Value::Null, Value::from)
    }
}
impl From<i64> for Value {
    fn from(f: i64) -> Self {
        Value::Integer(f)
    }
}
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}
impl<'a> From<&'a str> for Value {
    fn from(f: &'a str) -> Self {
        Value::Text(f.to_owned())
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(f: Vec<T>) -> Self {
        Value::List(f.into_iter().map(Into::into).collect())
    }
}
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Null => write!(f, "null"),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(ref v) => write!(f, "{}", v),
            Value::List(ref v) => {
                write!(f, "[")?;
                for (i, e) in v.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", e)?;
                }
                write!(f, "]")
            }
            Value::Map(ref v) => {
                write!(f, "{{")?;
                for (i, (k, e)) in v.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, e)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// An iterator over the elements of a collection `Value`.
#[derive(Debug)]
pub enum Elements<'a> {
    #[doc(hidden)]
    List(::std::slice::Iter<'a, Value>),
    #[doc(hidden)]
    Map(::std::collections::btree_map::Values<'a, String, Value>),
}
impl<'a> Iterator for Elements<'a> {
    type Item = &'a Value;
    fn next(&mut self) -> Option<Self::Item> {
        match *self {
            Elements::List(ref mut i) => i.next(),
            Elements::Map(ref mut i) => i.next(),
        }
    }
}

/// A numeric sample.
///
/// The original kind of the number is retained, but every comparison and
/// arithmetic operation is carried out on its `f64` representation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(missing_docs)]
pub enum Number {
    Integer(i64),
    Float(f64),
}
impl Number {
    /// Returns the `f64` representation of this number.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Compares two numbers by their `f64` representations.
    ///
    /// This is a total order: `-0.0` is less than `0.0`, and NaN is equal to
    /// itself and greater than any other value (including positive infinity).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.as_f64(), other.as_f64());
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                if a < b {
                    Ordering::Less
                } else if a > b {
                    Ordering::Greater
                } else {
                    // Distinguishes `-0.0` from `0.0`.
                    let (a, b) = (a.is_sign_negative(), b.is_sign_negative());
                    b.cmp(&a)
                }
            }
        }
    }
}
impl From<i64> for Number {
    fn from(f: i64) -> Self {
        Number::Integer(f)
    }
}
impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}
