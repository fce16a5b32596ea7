use super::value::{OptionMap, OptionValue};

/// Target of a trimming pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimMode {
    /// Keeps callbacks, classes and raw expressions.
    Native,
    /// Drops everything that has no JSON representation.
    Json,
}

/// Removes unset and empty entries from an untrimmed map, recursively.
///
/// Explicit `Null` entries are kept. Nested objects or arrays that trim down
/// to nothing are dropped together with their key.
#[must_use]
pub fn trim_map(untrimmed: &OptionMap, mode: TrimMode) -> OptionMap {
    let mut trimmed = OptionMap::with_capacity(untrimmed.len());
    for (key, value) in untrimmed {
        if let Some(value) = trim_entry(value, mode) {
            trimmed.insert(key.clone(), value);
        }
    }
    trimmed
}

/// Trims every element of an array.
///
/// Positions are preserved: unset elements become `null`, and nested objects
/// are kept even when they end up empty.
#[must_use]
pub fn trim_array(untrimmed: &[OptionValue], mode: TrimMode) -> Vec<OptionValue> {
    untrimmed
        .iter()
        .filter(|item| !(mode == TrimMode::Json && item.is_js_only()))
        .map(|item| match item {
            OptionValue::Undefined => OptionValue::Null,
            OptionValue::Object(map) => OptionValue::Object(trim_map(map, mode)),
            OptionValue::Array(items) => OptionValue::Array(trim_array(items, mode)),
            other => other.clone(),
        })
        .collect()
}

fn trim_entry(value: &OptionValue, mode: TrimMode) -> Option<OptionValue> {
    match value {
        OptionValue::Undefined => None,
        OptionValue::Object(map) => {
            let trimmed = trim_map(map, mode);
            (!trimmed.is_empty()).then_some(OptionValue::Object(trimmed))
        }
        OptionValue::Array(items) => {
            let trimmed = trim_array(items, mode);
            (!trimmed.is_empty()).then_some(OptionValue::Array(trimmed))
        }
        other if mode == TrimMode::Json && other.is_js_only() => None,
        other => Some(other.clone()),
    }
}
