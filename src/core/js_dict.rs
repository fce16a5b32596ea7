use indexmap::IndexMap;

use crate::error::{OptionsError, OptionsResult};

use super::field::OptionField;
use super::node::OptionNode;
use super::value::{OptionMap, OptionValue};

/// Open, string-keyed JavaScript object with typed values.
///
/// Used for option objects whose keys are not fixed, such as CSS styles.
#[derive(Debug, Clone, PartialEq)]
pub struct JsDict<V> {
    entries: IndexMap<String, V>,
    allow_empty_value: bool,
}

impl<V> Default for JsDict<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
            allow_empty_value: false,
        }
    }
}

impl<V: OptionField + Clone> JsDict<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `null` values instead of rejecting them.
    #[must_use]
    pub fn allowing_empty_values(mut self) -> Self {
        self.allow_empty_value = true;
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) -> OptionsResult<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(OptionsError::InvalidData(
                "javascript object keys must not be empty".to_owned(),
            ));
        }
        if !self.allow_empty_value && value.to_option_value().is_null() {
            return Err(OptionsError::invalid_value(&key, "empty values are not allowed"));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        // Builder form for literals known to be valid; invalid entries are skipped.
        if let Err(err) = self.insert(key, value) {
            tracing::warn!(error = %err, "skipping invalid javascript object entry");
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &V)> {
        self.entries.iter()
    }
}

impl<V: OptionField + Clone + PartialEq> OptionNode for JsDict<V> {
    fn to_untrimmed_map(&self) -> OptionMap {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_option_value()))
            .collect()
    }

    fn from_map(map: &OptionMap) -> OptionsResult<Self> {
        let mut dict = Self::default();
        for (key, value) in map {
            if value.is_undefined() {
                continue;
            }
            if value.is_null() {
                // Kept only when `V` can represent `null`.
                match V::from_option_value(value, key) {
                    Ok(converted) => {
                        dict.allow_empty_value = true;
                        dict.insert(key.clone(), converted)?;
                    }
                    Err(_) => tracing::debug!(key = %key, "dropping null entry"),
                }
                continue;
            }
            dict.insert(key.clone(), V::from_option_value(value, key)?)?;
        }
        Ok(dict)
    }
}

impl<V: OptionField + Clone + PartialEq> OptionField for JsDict<V> {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Object(self.to_untrimmed_map())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Object(map) => Self::from_map(map),
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected object, got {}", other.kind_name()),
            )),
        }
    }
}

/// A CSS property value: text such as `'12px'` or a bare number.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl OptionField for StyleValue {
    fn to_option_value(&self) -> OptionValue {
        match self {
            Self::Text(value) => OptionValue::String(value.clone()),
            Self::Number(value) => OptionValue::Number(*value),
        }
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::String(value) => Ok(Self::Text(value.clone())),
            OptionValue::Number(value) => Ok(Self::Number(*value)),
            other => Err(OptionsError::invalid_value(
                field,
                format!("css values must be strings or numbers, got {}", other.kind_name()),
            )),
        }
    }
}

/// CSS style object (`{ color: '#333', fontSize: '12px' }`).
pub type CssStyle = JsDict<StyleValue>;
