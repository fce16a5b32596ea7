//! Serialization core shared by every option node.

pub mod color;
pub mod field;
pub mod js_dict;
pub mod mro;
pub mod naming;
pub mod node;
pub mod trim;
pub mod value;

pub use color::{
    Color, Gradient, GradientStop, LinearGradient, Pattern, PatternOptions, RadialGradient,
    validate_color,
};
pub use field::{OptionField, read_field, untrimmed};
pub use js_dict::{CssStyle, JsDict, StyleValue};
pub use mro::{consolidate, merge_maps};
pub use naming::{is_js_identifier, to_camel_case, to_snake_case};
pub use node::OptionNode;
pub use trim::{TrimMode, trim_array, trim_map};
pub use value::{Nullable, OptionMap, OptionValue, map_from_json_str, map_to_json_string};
