use std::{cmp::Ordering, fmt::Display};

use crate::symbols::symbols::Type;

/// A runtime value.
///
/// `Real` only comes out of division, whose static type is still `INT`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i64),
    Real(f64),
    String(String),
}

impl Value {
    /// The built-in type a value of this kind satisfies.
    pub fn get_type(&self) -> Type {
        match self {
            Value::Boolean(_) => Type::Boolean,
            Value::Int(_) | Value::Real(_) => Type::Int,
            Value::String(_) => Type::String,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Orders two values of the same kind. Integers and reals compare numerically.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(left), Value::Int(right)) => Some(left.cmp(right)),
            (Value::Boolean(left), Value::Boolean(right)) => Some(left.cmp(right)),
            (Value::String(left), Value::String(right)) => Some(left.cmp(right)),
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::Real(value) if value.is_finite() && value.fract() == 0.0 => write!(f, "{:.1}", value),
            Value::Real(value) => write!(f, "{}", value),
            Value::String(value) => write!(f, "{}", value),
        }
    }
}
