//! Tagged numeric values.
//!
//! On the wire a [`FactValue`] is a bare JSON number or a string. Whole
//! numbers are written without a fraction (`75000000`), and non-finite
//! numbers, which JSON cannot carry, are written as the strings
//! `"Infinity"`, `"-Infinity"` and `"NaN"` and read back as numbers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const INFINITY: &str = "Infinity";
const NEG_INFINITY: &str = "-Infinity";
const NAN: &str = "NaN";

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A numeric fact value.
///
/// Input text that has no numeric prefix is kept as [`FactValue::Invalid`]
/// with the raw text, so downstream rules must handle it explicitly
/// instead of comparing against a NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum FactValue {
    /// Parsed number (may still be non-finite, e.g. `Infinity`).
    Number(f64),
    /// Raw text that could not be read as a number.
    Invalid(String),
}

impl FactValue {
    /// Returns the number if the value parsed.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Invalid(_) => None,
        }
    }

    /// Returns true if the value could not be parsed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

impl From<f64> for FactValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

impl Serialize for FactValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) if value.is_nan() => serializer.serialize_str(NAN),
            Self::Number(value) if value.is_infinite() => {
                let text = if value.is_sign_positive() {
                    INFINITY
                } else {
                    NEG_INFINITY
                };
                serializer.serialize_str(text)
            }
            Self::Number(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER => {
                serializer.serialize_i64(*value as i64)
            }
            Self::Number(value) => serializer.serialize_f64(*value),
            Self::Invalid(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for FactValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FactValueVisitor)
    }
}

struct FactValueVisitor;

impl Visitor<'_> for FactValueVisitor {
    type Value = FactValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(FactValue::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(FactValue::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(FactValue::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(match value {
            INFINITY => FactValue::Number(f64::INFINITY),
            NEG_INFINITY => FactValue::Number(f64::NEG_INFINITY),
            NAN => FactValue::Number(f64::NAN),
            raw => FactValue::Invalid(raw.to_string()),
        })
    }
}
