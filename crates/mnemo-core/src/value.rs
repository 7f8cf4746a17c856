use crate::error::{EncodeError, Result};

/// A value accepted by the hashing contract.
///
/// Scalars hash through their canonical text form; a sequence hashes as its
/// stringified elements joined by the configured list separator. Booleans,
/// nulls and maps have no canonical text form and are not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Sequence(Vec<Value>),
}

impl Value {
    /// Canonical text form of a scalar.
    ///
    /// Integers render in decimal, floats in the shortest form that
    /// round-trips (whole floats keep their trailing `.0`, so `5.0` stays
    /// distinct from the integer `5`). Sequences have no scalar form and
    /// are rejected here, so a sequence may only hold scalars.
    pub(crate) fn scalar_string(&self) -> Result<String> {
        match self {
            Value::Text(text) => Ok(text.clone()),
            Value::Int(n) => Ok(n.to_string()),
            Value::Float(x) => Ok(format!("{x:?}")),
            Value::Sequence(_) => Err(EncodeError::UnsupportedType {
                kind: "nested sequence",
            }),
        }
    }

    /// Convert a dynamic JSON value into a hashable one.
    ///
    /// Strings, numbers and arrays map directly; integers beyond `i64`
    /// range are carried as their exact decimal text, which hashes the
    /// same as an integer. Booleans, nulls and objects have no canonical
    /// text form and are rejected.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::String(text) => Ok(Value::Text(text.clone())),
            serde_json::Value::Number(number) => {
                if let Some(n) = number.as_i64() {
                    Ok(Value::Int(n))
                } else if let Some(n) = number.as_u64() {
                    // keeps the exact value; integers hash as decimal text
                    Ok(Value::Text(n.to_string()))
                } else if let Some(x) = number.as_f64() {
                    Ok(Value::Float(x))
                } else {
                    Err(EncodeError::UnsupportedType { kind: "number" })
                }
            }
            serde_json::Value::Array(items) => {
                let mut sequence = Vec::with_capacity(items.len());
                for item in items {
                    sequence.push(Value::from_json(item)?);
                }
                Ok(Value::Sequence(sequence))
            }
            serde_json::Value::Bool(_) => Err(EncodeError::UnsupportedType { kind: "boolean" }),
            serde_json::Value::Null => Err(EncodeError::UnsupportedType { kind: "null" }),
            serde_json::Value::Object(_) => Err(EncodeError::UnsupportedType { kind: "object" }),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(values: [T; N]) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Sequence(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Sequence(vec![a.into(), b.into(), c.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>, D: Into<Value>> From<(A, B, C, D)> for Value {
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        Value::Sequence(vec![a.into(), b.into(), c.into(), d.into()])
    }
}
