use std::cmp::Ordering;

use miette::{Result, miette};
use strum::{Display, EnumString};

/// Column types a table pattern can declare.
///
/// Parsed from the `TYPE` part of a column definition (`int`, `float`, `str`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum DataType {
    /// 64-bit signed integer.
    #[strum(to_string = "int")]
    Int64,

    /// 64-bit floating point number.
    #[strum(to_string = "float")]
    Float64,

    /// Free text, kept as read.
    #[strum(to_string = "str")]
    Text,
}

impl DataType {
    /// Casts raw cell text to this type.
    pub fn cast(self, raw: &str) -> Result<Value> {
        match self {
            DataType::Int64 => raw
                .trim()
                .parse::<i64>()
                .map(Value::Int64)
                .map_err(|_| miette!("It is not possible to convert \"{raw}\" to type \"{self}\"")),
            DataType::Float64 => raw
                .trim()
                .parse::<f64>()
                .map(Value::Float64)
                .map_err(|_| miette!("It is not possible to convert \"{raw}\" to type \"{self}\"")),
            DataType::Text => Ok(Value::Text(raw.to_owned())),
        }
    }

    /// The value substituted when a cast fails.
    pub fn zero(self) -> Value {
        match self {
            DataType::Int64 => Value::Int64(0),
            DataType::Float64 => Value::Float64(0.0),
            DataType::Text => Value::Text(String::new()),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Int64 | DataType::Float64)
    }
}

/// A single cell value.
///
/// Raw rows hold [`Value::Text`] everywhere; casting turns cells into the
/// variant matching their column's [`DataType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int64(i64),
    Float64(f64),
    Text(String),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int64(i) => write!(f, "{i}"),
            Value::Float64(fl) => write!(f, "{}", format_float(*fl)),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int64(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float64(value)
    }
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(i) => Some(*i as f64),
            Value::Float64(fl) => Some(*fl),
            Value::Text(_) => None,
        }
    }

    /// Orders two values of comparable types.
    ///
    /// Integers and floats compare numerically with each other, text compares
    /// lexicographically. Text against a number has no ordering.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int64(a), Value::Int64(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Text(_), _) | (_, Value::Text(_)) => None,
            (a, b) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        }
    }
}

/// Whole floats keep one decimal (`38.0`), the rest use the shortest
/// representation that round-trips (`21.36`).
///
/// Magnitudes from `1e16` up, or below `1e-4`, switch to exponent notation
/// with a signed, at least two-digit exponent (`1e+16`, `1.5e-07`).
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        let formatted = format!("{value:e}");
        let (mantissa, exponent) = formatted
            .split_once('e')
            .unwrap_or((formatted.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        format!("{mantissa}e{sign}{digits:0>2}")
    } else if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
