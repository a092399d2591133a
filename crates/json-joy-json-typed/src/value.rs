//! [`DynamicValue`]: schema-less JSON value that keeps integer width.

use std::fmt;

use indexmap::IndexMap;

use crate::encoder::JsonEncoder;
use crate::error::DecodeError;
use crate::number::narrow_integer;

/// Ordered object representation. Keys keep first-insertion order.
pub type DynamicMap = IndexMap<String, DynamicValue>;

/// Ordered array representation.
pub type DynamicList = Vec<DynamicValue>;

/// Any JSON value, with numbers split into three widths.
///
/// Unlike `serde_json::Value`, an integer literal never silently becomes a
/// float: `153` is `Int32(153)`, `5039.2` is `Float64(5039.2)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Bool(bool),
    String(String),
    /// Integer literal within the `i32` range.
    Int32(i32),
    /// Integer literal within the `i64` range but outside `i32`.
    Int64(i64),
    /// Literal written with a fraction or exponent.
    Float64(f64),
    Array(DynamicList),
    Object(DynamicMap),
}

impl DynamicValue {
    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            DynamicValue::Null => "null",
            DynamicValue::Bool(_) => "bool",
            DynamicValue::String(_) => "string",
            DynamicValue::Int32(_) => "int32",
            DynamicValue::Int64(_) => "int64",
            DynamicValue::Float64(_) => "float64",
            DynamicValue::Array(_) => "array",
            DynamicValue::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(
            self,
            DynamicValue::Int32(_) | DynamicValue::Int64(_) | DynamicValue::Float64(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            DynamicValue::Int32(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer value of `Int32` or `Int64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DynamicValue::Int32(i) => Some(i64::from(*i)),
            DynamicValue::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Any numeric variant as `f64`. `Int64` values beyond 2^53 lose precision.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Int32(i) => Some(f64::from(*i)),
            DynamicValue::Int64(i) => Some(*i as f64),
            DynamicValue::Float64(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DynamicList> {
        match self {
            DynamicValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&DynamicMap> {
        match self {
            DynamicValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Member of an object by key.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Element of an array by position.
    pub fn get_index(&self, index: usize) -> Option<&DynamicValue> {
        self.as_array().and_then(|arr| arr.get(index))
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> String {
        JsonEncoder::new().encode_to_string(self)
    }
}

impl fmt::Display for DynamicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<bool> for DynamicValue {
    fn from(b: bool) -> Self {
        DynamicValue::Bool(b)
    }
}

impl From<i32> for DynamicValue {
    fn from(i: i32) -> Self {
        DynamicValue::Int32(i)
    }
}

/// Narrows to `Int32` when the value fits, like a decoded literal would.
impl From<i64> for DynamicValue {
    fn from(i: i64) -> Self {
        narrow_integer(i)
    }
}

impl From<f64> for DynamicValue {
    fn from(f: f64) -> Self {
        DynamicValue::Float64(f)
    }
}

impl From<&str> for DynamicValue {
    fn from(s: &str) -> Self {
        DynamicValue::String(s.to_owned())
    }
}

impl From<String> for DynamicValue {
    fn from(s: String) -> Self {
        DynamicValue::String(s)
    }
}

impl From<DynamicList> for DynamicValue {
    fn from(arr: DynamicList) -> Self {
        DynamicValue::Array(arr)
    }
}

impl From<DynamicMap> for DynamicValue {
    fn from(obj: DynamicMap) -> Self {
        DynamicValue::Object(obj)
    }
}

/// `serde_json` has already parsed the literal; integers are narrowed by the
/// same range rule and `u64` values above `i64::MAX` are rejected, as the
/// default [`BigIntegerPolicy`](crate::BigIntegerPolicy) does.
impl TryFrom<serde_json::Value> for DynamicValue {
    type Error = DecodeError;

    fn try_from(v: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match v {
            serde_json::Value::Null => DynamicValue::Null,
            serde_json::Value::Bool(b) => DynamicValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    narrow_integer(i)
                } else if n.is_u64() {
                    return Err(DecodeError::NumberOutOfRange(n.to_string()));
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() => DynamicValue::Float64(f),
                        _ => return Err(DecodeError::NumberOutOfRange(n.to_string())),
                    }
                }
            }
            serde_json::Value::String(s) => DynamicValue::String(s),
            serde_json::Value::Array(arr) => DynamicValue::Array(
                arr.into_iter()
                    .map(DynamicValue::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            serde_json::Value::Object(obj) => DynamicValue::Object(
                obj.into_iter()
                    .map(|(k, v)| DynamicValue::try_from(v).map(|v| (k, v)))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<DynamicValue> for serde_json::Value {
    fn from(v: DynamicValue) -> Self {
        match v {
            DynamicValue::Null => serde_json::Value::Null,
            DynamicValue::Bool(b) => serde_json::Value::Bool(b),
            DynamicValue::String(s) => serde_json::Value::String(s),
            DynamicValue::Int32(i) => serde_json::Value::from(i),
            DynamicValue::Int64(i) => serde_json::Value::from(i),
            DynamicValue::Float64(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            DynamicValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            DynamicValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
