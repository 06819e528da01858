mod convert;
mod json;

use std::fmt;

use indexmap::IndexMap;

pub use convert::{FromValue, ValueError};
pub use json::map_from_json;

#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Integral floats collapse to `Int`, so `1` and `1.0` are the same number.
    /// Returns `None` for NaN and infinities.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Some(Self::Int(value as i64));
        }
        Some(Self::Float(value))
    }

    pub fn to_i64_exact(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Float(value) => {
                if !value.is_finite() || value.fract() != 0.0 {
                    return None;
                }
                if value < i64::MIN as f64 || value >= i64::MAX as f64 {
                    return None;
                }
                Some(value as i64)
            }
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        // An Int and a Float are equal only when the float converts exactly.
        match (*self, *other) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            (Self::Int(int), float @ Self::Float(_)) | (float @ Self::Float(_), Self::Int(int)) => {
                float.to_i64_exact() == Some(int)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

/// How mapping entries are compared by [`Value::matches`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapOrder {
    /// Same entries in the same insertion order. Equivalent to comparing
    /// canonical serializations.
    #[default]
    Sensitive,
    /// Same set of entries, any order.
    Insensitive,
}

#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    Seq(Vec<Value>),
    Map(IndexMap<String, Value>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Seq(_) => "array",
            Self::Map(_) => "object",
        }
    }

    /// Structural equality. Sequences are always order-sensitive; mappings
    /// follow `order`.
    pub fn matches(&self, other: &Value, order: MapOrder) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Text(lhs), Self::Text(rhs)) => lhs == rhs,
            (Self::Seq(lhs), Self::Seq(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs
                        .iter()
                        .zip(rhs)
                        .all(|(lhs, rhs)| lhs.matches(rhs, order))
            }
            (Self::Map(lhs), Self::Map(rhs)) => {
                if lhs.len() != rhs.len() {
                    return false;
                }
                match order {
                    MapOrder::Sensitive => {
                        lhs.iter().zip(rhs).all(|((lhs_key, lhs), (rhs_key, rhs))| {
                            lhs_key == rhs_key && lhs.matches(rhs, order)
                        })
                    }
                    MapOrder::Insensitive => lhs.iter().all(|(key, lhs)| {
                        rhs.get(key).is_some_and(|rhs| lhs.matches(rhs, order))
                    }),
                }
            }
            _ => false,
        }
    }

    pub fn decode<T: FromValue>(&self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

/// `==` is strict: mapping entries must also agree in order.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other, MapOrder::Sensitive)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}
