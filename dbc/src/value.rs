//! The tagged value a caller passes into [`crate::Database::encode_message`]
//! or gets back from [`crate::Database::decode_message`] (spec §9, "Duck-typed
//! values ... become a tagged variant `Value ::= Int | Float | Label(string)`
//! at the public boundary").

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Label(String),
}

impl Value {
    /// Numeric view used by the encoder; `Label` has no numeric form.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Value::Label(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            // An integral float (e.g. `0.0`) still prints with its decimal
            // point, matching the reference tooling's float rendering
            // (spec §8.5: `SENSOR_SONARS_rear: 0.0`) and distinguishing it
            // from a `Value::Int`.
            Value::Float(v) if v.is_finite() && *v == v.trunc() => write!(f, "{v:.1}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Label(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Label(v)
    }
}
