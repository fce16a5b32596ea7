use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{OptionsError, OptionsResult};
use crate::js::{CallbackFunction, JsClass};

/// Ordered option map. Insertion order is the emitted key order.
pub type OptionMap = IndexMap<String, OptionValue>;

/// Dynamic value stored in an option map.
///
/// `Undefined` marks a declared field that was never set and is removed by
/// trimming. `Null` is an explicit `null` that must survive serialization.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<OptionValue>),
    Object(OptionMap),
    Callback(CallbackFunction),
    Class(JsClass),
    /// Raw JavaScript expression source, emitted verbatim.
    Expression(String),
}

impl OptionValue {
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True for values that only exist in JavaScript and have no JSON form.
    #[must_use]
    pub fn is_js_only(&self) -> bool {
        matches!(
            self,
            Self::Callback(_) | Self::Class(_) | Self::Expression(_)
        )
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&OptionMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Short name of the variant, used in validation messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Callback(_) => "function",
            Self::Class(_) => "class",
            Self::Expression(_) => "expression",
        }
    }

    /// Epoch milliseconds, the time unit expected by the charting library.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self::Number(time.timestamp_millis() as f64)
    }

    pub fn from_decimal(value: Decimal) -> OptionsResult<Self> {
        value.to_f64().map(Self::Number).ok_or_else(|| {
            OptionsError::InvalidData(format!("decimal `{value}` is not representable as f64"))
        })
    }

    /// Converts into a JSON value. JavaScript-only values and `Undefined`
    /// yield `None`; non-finite numbers become `null`.
    #[must_use]
    pub fn to_json_value(&self) -> Option<Value> {
        match self {
            Self::Undefined | Self::Callback(_) | Self::Class(_) | Self::Expression(_) => None,
            Self::Null => Some(Value::Null),
            Self::Bool(value) => Some(Value::Bool(*value)),
            Self::Number(value) => Some(number_to_json(*value)),
            Self::String(value) => Some(Value::String(value.clone())),
            Self::Array(items) => Some(Value::Array(
                items.iter().filter_map(Self::to_json_value).collect(),
            )),
            Self::Object(map) => Some(Value::Object(
                map.iter()
                    .filter_map(|(key, value)| Some((key.clone(), value.to_json_value()?)))
                    .collect(),
            )),
        }
    }
}

fn number_to_json(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        return Value::from(value as i64);
    }
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}

/// JSON view of a value. Meant for maps trimmed in JSON mode: values with no
/// JSON counterpart are written as `null`.
impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined | Self::Null | Self::Callback(_) | Self::Class(_) | Self::Expression(_) => {
                serializer.serialize_unit()
            }
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(value) => number_to_json(*value).serialize(serializer),
            Self::String(value) => serializer.serialize_str(value),
            Self::Array(items) => items.serialize(serializer),
            Self::Object(map) => map.serialize(serializer),
        }
    }
}

impl From<Value> for OptionValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(value),
            Value::Number(value) => value.as_f64().map_or(Self::Null, Self::Number),
            Value::String(value) => Self::String(value),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(value: OptionMap) -> Self {
        Self::Object(value)
    }
}

/// Either an explicit `null` or a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub enum Nullable<T> {
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Null => None,
            Self::Value(value) => Some(value),
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// Parses a JSON document whose top level must be an object.
pub fn map_from_json_str(input: &str) -> OptionsResult<OptionMap> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| OptionsError::InvalidData(format!("failed to parse options json: {e}")))?;
    match OptionValue::from(value) {
        OptionValue::Object(map) => Ok(map),
        other => Err(OptionsError::InvalidData(format!(
            "options json must be an object, got {}",
            other.kind_name()
        ))),
    }
}

/// Serializes an already trimmed map to JSON, keeping key order.
pub fn map_to_json_string(map: &OptionMap, pretty: bool) -> OptionsResult<String> {
    let result = if pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    };
    result.map_err(|e| OptionsError::InvalidData(format!("failed to serialize options json: {e}")))
}
