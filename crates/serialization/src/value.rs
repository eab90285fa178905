//! [`Value`] — the closed set of things one decode call can produce.

use num_bigint::BigInt;

use crate::Sentinel;

/// A decoded wire value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    /// `INT32`, zig-zag decoded.
    Int32(i32),
    /// `UINT32`.
    Uint32(u32),
    /// A `DOUBLE` with no fractional part that round-trips through `i64`.
    Integer(i64),
    /// Any other `DOUBLE`, including NaN and the infinities.
    Double(f64),
    BigInt(BigInt),
    Str(String),
    Date(Date),
    Sentinel(Sentinel),
    /// Produced by an injected [`ContainerDecoder`](crate::ContainerDecoder).
    Extension(Box<Extension>),
}

impl Value {
    pub const HOLE: Value = Value::Sentinel(Sentinel::Hole);
    pub const UNDEFINED: Value = Value::Sentinel(Sentinel::Undefined);
    pub const NULL: Value = Value::Sentinel(Sentinel::Null);
    pub const NOTHING: Value = Value::Sentinel(Sentinel::Nothing);

    /// `true` for [`Sentinel::Nothing`], the end-of-recognized-input marker.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Value::Sentinel(Sentinel::Nothing))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<Sentinel> for Value {
    fn from(s: Sentinel) -> Self {
        Value::Sentinel(s)
    }
}

/// A point in time as milliseconds since the Unix epoch.
///
/// Milliseconds are truncated toward zero on construction. NaN is kept and
/// stands for an invalid date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Date {
    millis: f64,
}

impl Date {
    pub fn from_millis(millis: f64) -> Self {
        Self {
            millis: millis.trunc(),
        }
    }

    pub fn millis(&self) -> f64 {
        self.millis
    }

    pub fn is_valid(&self) -> bool {
        self.millis.is_finite()
    }
}

/// A composite value assembled by a container decoder.
///
/// `items` holds the children in wire order; for keyed containers keys and
/// values alternate.
#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    pub tag: u8,
    pub items: Vec<Value>,
}

impl Extension {
    pub fn new(tag: u8, items: Vec<Value>) -> Self {
        Self { tag, items }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        match v {
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int32(i) => serde_json::json!(i),
            Value::Uint32(u) => serde_json::json!(u),
            Value::Integer(i) => serde_json::json!(i),
            Value::Double(f) => serde_json::json!(f),
            Value::BigInt(i) => serde_json::Value::String(i.to_string()),
            Value::Str(s) => serde_json::Value::String(s),
            Value::Date(d) => serde_json::json!(d.millis()),
            Value::Sentinel(_) => serde_json::Value::Null,
            Value::Extension(ext) => serde_json::Value::Array(
                ext.items.into_iter().map(serde_json::Value::from).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sentinels_never_equal_scalars() {
        let scalars = [
            Value::Bool(false),
            Value::Int32(0),
            Value::Uint32(0),
            Value::Integer(0),
            Value::Str(String::new()),
        ];
        for sentinel in [Value::HOLE, Value::UNDEFINED, Value::NULL, Value::NOTHING] {
            for scalar in &scalars {
                assert_ne!(&sentinel, scalar);
            }
        }
        assert_ne!(Value::NULL, Value::UNDEFINED);
        assert!(Value::NOTHING.is_nothing());
        assert!(!Value::NULL.is_nothing());
    }

    #[test]
    fn date_truncates_toward_zero() {
        assert_eq!(Date::from_millis(1.9).millis(), 1.0);
        assert_eq!(Date::from_millis(-1.9).millis(), -1.0);
        assert!(!Date::from_millis(f64::NAN).is_valid());
    }

    #[test]
    fn json_conversion() {
        let big: BigInt = BigInt::from(1u8) << 100;
        let cases = vec![
            (Value::Bool(true), json!(true)),
            (Value::Int32(-5), json!(-5)),
            (Value::Uint32(7), json!(7)),
            (Value::Integer(3), json!(3)),
            (Value::Double(3.5), json!(3.5)),
            (
                Value::BigInt(big),
                json!("1267650600228229401496703205376"),
            ),
            (Value::from("hi"), json!("hi")),
            (Value::Date(Date::from_millis(1000.0)), json!(1000.0)),
            (Value::HOLE, json!(null)),
            (Value::NOTHING, json!(null)),
            (
                Value::Extension(Box::new(Extension::new(
                    b'A',
                    vec![Value::Int32(1), Value::NULL],
                ))),
                json!([1, null]),
            ),
        ];
        for (value, expected) in cases {
            assert_eq!(serde_json::Value::from(value), expected);
        }
    }
}
