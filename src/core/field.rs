use crate::error::{OptionsError, OptionsResult};

use super::naming::to_snake_case;
use super::value::{Nullable, OptionMap, OptionValue};

/// Conversion between a typed field and its dynamic option value.
pub trait OptionField: Sized {
    fn to_option_value(&self) -> OptionValue;

    /// `field` names the key being read and is only used for error messages.
    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self>;
}

static UNDEFINED: OptionValue = OptionValue::Undefined;

/// Reads `key` from `map`, falling back to its snake_case spelling.
///
/// A missing key is passed to the field as `Undefined`.
pub fn read_field<T: OptionField>(map: &OptionMap, key: &str) -> OptionsResult<T> {
    let value = match map.get(key) {
        Some(value) => value,
        None => map
            .get(to_snake_case(key).as_str())
            .unwrap_or(&UNDEFINED),
    };
    T::from_option_value(value, key)
}

/// Builds an untrimmed map from `(key, value)` pairs.
pub fn untrimmed<const N: usize>(entries: [(&str, OptionValue); N]) -> OptionMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}

fn type_error(field: &str, expected: &str, value: &OptionValue) -> OptionsError {
    OptionsError::invalid_value(
        field,
        format!("expected {expected}, got {}", value.kind_name()),
    )
}

impl<T: OptionField> OptionField for Option<T> {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Some(value) => value.to_option_value(),
            None => OptionValue::Undefined,
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        if value.is_undefined() {
            return Ok(None);
        }
        match T::from_option_value(value, field) {
            Ok(inner) => Ok(Some(inner)),
            Err(_) if value.is_null() => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<T: OptionField> OptionField for Nullable<T> {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Null => OptionValue::Null,
            Self::Value(value) => value.to_option_value(),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Null => Ok(Self::Null),
            other => T::from_option_value(other, field).map(Self::Value),
        }
    }
}

impl<T: OptionField> OptionField for Vec<T> {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Array(self.iter().map(OptionField::to_option_value).collect())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| T::from_option_value(item, &format!("{field}[{index}]")))
                .collect(),
            other => Err(type_error(field, "array", other)),
        }
    }
}

impl OptionField for bool {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Bool(*self)
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Bool(value) => Ok(*value),
            other => Err(type_error(field, "boolean", other)),
        }
    }
}

impl OptionField for f64 {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Number(*self)
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Number(value) => Ok(*value),
            OptionValue::String(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| OptionsError::invalid_value(field, format!("`{text}` is not numeric"))),
            other => Err(type_error(field, "number", other)),
        }
    }
}

impl OptionField for i32 {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Number(f64::from(*self))
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        let number = f64::from_option_value(value, field)?;
        if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
            return Err(OptionsError::invalid_value(
                field,
                format!("`{number}` is not a 32-bit integer"),
            ));
        }
        Ok(number as i32)
    }
}

impl OptionField for u32 {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Number(f64::from(*self))
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        let number = f64::from_option_value(value, field)?;
        if number.fract() != 0.0 || number < 0.0 || number > f64::from(u32::MAX) {
            return Err(OptionsError::invalid_value(
                field,
                format!("`{number}` is not a non-negative integer"),
            ));
        }
        Ok(number as u32)
    }
}

impl OptionField for String {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::String(self.clone())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::String(value) => Ok(value.clone()),
            OptionValue::Number(value) => Ok(value.to_string()),
            // Strings that read as javascript are emitted unquoted and come back parsed.
            OptionValue::Expression(source) => Ok(source.clone()),
            OptionValue::Callback(callback) => Ok(callback.to_js_literal()),
            OptionValue::Class(class) => Ok(class.to_js_literal()),
            other => Err(type_error(field, "string", other)),
        }
    }
}

impl OptionField for OptionValue {
    fn to_option_value(&self) -> OptionValue {
        self.clone()
    }

    fn from_option_value(value: &OptionValue, _field: &str) -> OptionsResult<Self> {
        Ok(value.clone())
    }
}

impl OptionField for OptionMap {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Object(self.clone())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Object(map) => Ok(map.clone()),
            other => Err(type_error(field, "object", other)),
        }
    }
}

/// Declares a closed set of string values with `OptionField` support.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            pub fn parse(value: &str, field: &str) -> $crate::error::OptionsResult<Self> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err($crate::error::OptionsError::InvalidValue {
                        field: field.to_owned(),
                        reason: format!(
                            "`{other}` is not one of: {}",
                            [$($text),+].join(", ")
                        ),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::core::OptionField for $name {
            fn to_option_value(&self) -> $crate::core::OptionValue {
                $crate::core::OptionValue::String(self.as_str().to_owned())
            }

            fn from_option_value(
                value: &$crate::core::OptionValue,
                field: &str,
            ) -> $crate::error::OptionsResult<Self> {
                match value {
                    $crate::core::OptionValue::String(text) => Self::parse(text, field),
                    other => Err($crate::error::OptionsError::InvalidValue {
                        field: field.to_owned(),
                        reason: format!("expected string, got {}", other.kind_name()),
                    }),
                }
            }
        }
    };
}

/// Implements `OptionField` for option nodes so they can nest inside each other.
#[macro_export]
macro_rules! node_field {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $crate::core::OptionField for $node {
                fn to_option_value(&self) -> $crate::core::OptionValue {
                    $crate::core::OptionValue::Object(
                        <$node as $crate::core::OptionNode>::to_untrimmed_map(self),
                    )
                }

                fn from_option_value(
                    value: &$crate::core::OptionValue,
                    field: &str,
                ) -> $crate::error::OptionsResult<Self> {
                    match value {
                        $crate::core::OptionValue::Object(map) => {
                            <$node as $crate::core::OptionNode>::from_map(map)
                        }
                        other => Err($crate::error::OptionsError::InvalidValue {
                            field: field.to_owned(),
                            reason: format!("expected object, got {}", other.kind_name()),
                        }),
                    }
                }
            }
        )+
    };
}
