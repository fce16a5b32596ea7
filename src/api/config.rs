use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

/// Controls how JavaScript literals are emitted.
///
/// Serializable so host applications can keep emission settings next to
/// their chart definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiteralConfig {
    /// Parse every string to decide whether it is an object expression,
    /// instead of only strings starting with `new `.
    #[serde(default)]
    pub careful_validation: bool,
    /// Quote every key, not just keys that are not valid identifiers.
    #[serde(default)]
    pub keys_as_strings: bool,
    /// Spaces per nesting level.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            careful_validation: false,
            keys_as_strings: false,
            indent: default_indent(),
        }
    }
}

impl LiteralConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_careful_validation(mut self, enabled: bool) -> Self {
        self.careful_validation = enabled;
        self
    }

    #[must_use]
    pub fn with_keys_as_strings(mut self, enabled: bool) -> Self {
        self.keys_as_strings = enabled;
        self
    }

    /// Sets indentation width; values above 8 are rejected.
    pub fn with_indent(mut self, indent: usize) -> OptionsResult<Self> {
        if indent > 8 {
            return Err(OptionsError::invalid_value("indent", "must be <= 8 spaces"));
        }
        self.indent = indent;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> OptionsResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OptionsError::InvalidData(format!("failed to serialize literal config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> OptionsResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            OptionsError::InvalidData(format!("failed to parse literal config: {e}"))
        })?;
        config.with_indent(config.indent)
    }
}

fn default_indent() -> usize {
    2
}
