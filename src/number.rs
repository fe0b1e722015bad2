use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, ScribeError};

/// A value that should be read as a real number: stroke widths and
/// coordinates coming from callers, scripts or config files.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    String(String),
    Other(Value),
}

impl NumericInput {
    /// Coerces to `f64`. Numeric strings are accepted; anything else fails
    /// with [`ScribeError::TypeConversion`] naming `field`.
    pub fn to_f64(&self, field: &str) -> Result<f64> {
        match self {
            NumericInput::Number(val) => Ok(*val),
            NumericInput::String(val) => val
                .trim()
                .parse::<f64>()
                .map_err(|_| ScribeError::type_conversion(field, self)),
            NumericInput::Other(_) => Err(ScribeError::type_conversion(field, self)),
        }
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Number(val) => write!(f, "{val}"),
            NumericInput::String(val) => write!(f, "{val:?}"),
            NumericInput::Other(val) => write!(f, "{val}"),
        }
    }
}

macro_rules! numeric_from {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NumericInput {
            fn from(value: $ty) -> Self {
                NumericInput::Number(f64::from(value))
            }
        })*
    };
}

numeric_from!(f64, f32, i32, u32, i16, u16, i8, u8);

macro_rules! numeric_from_lossy {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NumericInput {
            fn from(value: $ty) -> Self {
                NumericInput::Number(value as f64)
            }
        })*
    };
}

numeric_from_lossy!(i64, u64, i128, u128, isize, usize);

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::String(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::String(value)
    }
}
