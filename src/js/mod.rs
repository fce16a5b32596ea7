//! JavaScript source handling: parsing option literals back into option maps
//! with `oxc_parser`, and emitting option maps as object literals.

pub mod callback;
pub mod convert;
pub mod literal;
pub mod parse;

pub use callback::{CallbackFunction, JsClass};
pub use convert::MAX_NESTING;
pub use literal::{
    assemble_js_literal, format_js_number, is_js_function_or_class, is_js_object,
    quote_js_string, serialize_to_js_literal,
};
pub use parse::{ChartCall, convert_js_literal, parse_chart_call, parse_declaration};

use tracing::debug;

use crate::core::{OptionMap, OptionValue};
use crate::error::{OptionsError, OptionsResult};

/// Parses an options object literal into an option map.
///
/// Accepts a bare `{...}` as well as `var|let|const name = {...};`.
pub fn parse_options_map(source: &str) -> OptionsResult<OptionMap> {
    let (name, value) = parse_declaration(source)?;
    if let Some(name) = &name {
        debug!(variable = %name, "parsed options from variable declaration");
    }
    match value {
        OptionValue::Object(map) => Ok(map),
        other => Err(OptionsError::InvalidData(format!(
            "expected a javascript object literal, got {}",
            other.kind_name()
        ))),
    }
}
