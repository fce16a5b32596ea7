use std::path::Path;

use crate::api::LiteralConfig;
use crate::error::{OptionsError, OptionsResult};
use crate::js;

use super::mro::merge_maps;
use super::trim::{TrimMode, trim_map};
use super::value::{OptionMap, map_from_json_str, map_to_json_string};

/// A serializable configuration node.
///
/// Implementors describe how their declared fields map to camelCase keys;
/// trimming, JSON and JavaScript-literal conversion are provided on top.
pub trait OptionNode: Default + Clone {
    /// All declared fields, unset ones as `OptionValue::Undefined`.
    fn to_untrimmed_map(&self) -> OptionMap;

    /// Builds the node from a map. Unknown keys are ignored.
    fn from_map(map: &OptionMap) -> OptionsResult<Self>;

    /// Re-checks field constraints that cannot be expressed in the field types.
    fn validate(&self) -> OptionsResult<()> {
        Ok(())
    }

    fn validated(self) -> OptionsResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Trimmed map, keeping JavaScript-only values.
    fn to_map(&self) -> OptionMap {
        trim_map(&self.to_untrimmed_map(), TrimMode::Native)
    }

    fn is_empty(&self) -> bool {
        self.to_map().is_empty()
    }

    /// Compact JSON. Callbacks, classes and raw expressions are dropped.
    fn to_json(&self) -> OptionsResult<String> {
        map_to_json_string(&trim_map(&self.to_untrimmed_map(), TrimMode::Json), false)
    }

    fn to_json_pretty(&self) -> OptionsResult<String> {
        map_to_json_string(&trim_map(&self.to_untrimmed_map(), TrimMode::Json), true)
    }

    fn from_json_str(input: &str) -> OptionsResult<Self> {
        Self::from_map(&map_from_json_str(input)?)
    }

    /// JavaScript object literal, or `None` when nothing is set.
    fn to_js_literal(&self) -> Option<String> {
        self.to_js_literal_with(&LiteralConfig::default())
    }

    fn to_js_literal_with(&self, config: &LiteralConfig) -> Option<String> {
        js::assemble_js_literal(&self.to_map(), config)
    }

    /// Parses `{...}` or a variable declaration initialized with one.
    fn from_js_literal(input: &str) -> OptionsResult<Self> {
        Self::from_map(&js::parse_options_map(input)?)
    }

    fn from_js_literal_file(path: impl AsRef<Path>) -> OptionsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_js_literal(&source)
    }

    /// Deep-merges this node into `target` and returns the result.
    ///
    /// With `overwrite` unset, only settings missing from `target` are copied.
    fn copy_onto(&self, target: &Self, overwrite: bool) -> OptionsResult<Self> {
        let mut merged = target.to_map();
        merge_maps(&mut merged, &self.to_map(), overwrite);
        Self::from_map(&merged)
    }
}
