//! JavaScript object-literal emission.

use oxc_ast::ast::Expression;
use tracing::trace;

use crate::api::LiteralConfig;
use crate::core::{OptionMap, OptionValue, is_js_identifier};

use super::parse::with_expression;

/// Emits `map` as a JavaScript object literal; `None` when the map is empty
/// or every entry is unset.
#[must_use]
pub fn assemble_js_literal(map: &OptionMap, config: &LiteralConfig) -> Option<String> {
    assemble_object(map, config, 0)
}

/// Emits one value at nesting level zero; `None` for `Undefined`.
#[must_use]
pub fn serialize_to_js_literal(value: &OptionValue, config: &LiteralConfig) -> Option<String> {
    serialize_value(value, config, 0)
}

fn assemble_object(map: &OptionMap, config: &LiteralConfig, depth: usize) -> Option<String> {
    let inner_pad = " ".repeat(config.indent * (depth + 1));
    let entries: Vec<String> = map
        .iter()
        .filter_map(|(key, value)| {
            let serialized = serialize_value(value, config, depth + 1)?;
            Some(format!("{inner_pad}{}: {serialized}", format_key(key, config)))
        })
        .collect();
    if entries.is_empty() {
        return None;
    }
    let outer_pad = " ".repeat(config.indent * depth);
    Some(format!("{{\n{}\n{outer_pad}}}", entries.join(",\n")))
}

fn serialize_value(value: &OptionValue, config: &LiteralConfig, depth: usize) -> Option<String> {
    match value {
        OptionValue::Undefined => None,
        OptionValue::Null => Some("null".to_owned()),
        OptionValue::Bool(value) => Some(value.to_string()),
        OptionValue::Number(value) => Some(format_js_number(*value)),
        OptionValue::String(text) => Some(serialize_string(text, config)),
        OptionValue::Array(items) => Some(serialize_array(items, config, depth)),
        OptionValue::Object(map) => {
            Some(assemble_object(map, config, depth).unwrap_or_else(|| "{}".to_owned()))
        }
        OptionValue::Callback(callback) => Some(callback.to_js_literal()),
        OptionValue::Class(class) => Some(class.to_js_literal()),
        OptionValue::Expression(source) => Some(source.clone()),
    }
}

fn serialize_array(items: &[OptionValue], config: &LiteralConfig, depth: usize) -> String {
    let nested = items.iter().any(|item| {
        matches!(
            item,
            OptionValue::Object(_) | OptionValue::Callback(_) | OptionValue::Class(_)
        )
    });
    let rendered: Vec<String> = items
        .iter()
        .map(|item| {
            serialize_value(item, config, depth + usize::from(nested))
                .unwrap_or_else(|| "undefined".to_owned())
        })
        .collect();
    if rendered.is_empty() {
        return "[]".to_owned();
    }
    if !nested {
        return format!("[{}]", rendered.join(", "));
    }
    let inner_pad = " ".repeat(config.indent * (depth + 1));
    let outer_pad = " ".repeat(config.indent * depth);
    let body: Vec<String> = rendered
        .into_iter()
        .map(|item| format!("{inner_pad}{item}"))
        .collect();
    format!("[\n{}\n{outer_pad}]", body.join(",\n"))
}

fn serialize_string(text: &str, config: &LiteralConfig) -> String {
    if is_js_function_or_class(text) || is_js_object(text, config.careful_validation) {
        trace!(len = text.len(), "emitting string as javascript source");
        return text.trim().to_owned();
    }
    quote_js_string(text)
}

fn format_key(key: &str, config: &LiteralConfig) -> String {
    if config.keys_as_strings || !is_js_identifier(key) {
        quote_js_string(key)
    } else {
        key.to_owned()
    }
}

/// Single-quoted JavaScript string literal, safe to embed in a `<script>` tag.
#[must_use]
pub fn quote_js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    let mut previous = '\0';
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '/' if previous == '<' => out.push_str("\\/"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
        previous = ch;
    }
    out.push('\'');
    out
}

/// Shortest JavaScript spelling of a number.
#[must_use]
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        (if value > 0.0 { "Infinity" } else { "-Infinity" }).to_owned()
    } else {
        value.to_string()
    }
}

/// True when the whole source parses, without errors, as a function, arrow
/// function or class.
#[must_use]
pub fn is_js_function_or_class(source: &str) -> bool {
    let trimmed = source.trim_start();
    let candidate = trimmed.starts_with("function")
        || trimmed.starts_with("async")
        || trimmed.starts_with("class")
        || trimmed.contains("=>");
    if !candidate {
        return false;
    }
    with_expression(source, |expression, _| {
        Ok(matches!(
            expression,
            Expression::FunctionExpression(_)
                | Expression::ArrowFunctionExpression(_)
                | Expression::ClassExpression(_)
        ))
    })
    .unwrap_or(false)
}

/// True when the source is a JavaScript object expression.
///
/// Without careful validation only `new ...` expressions are considered;
/// careful validation also accepts object literals.
#[must_use]
pub fn is_js_object(source: &str, careful_validation: bool) -> bool {
    let trimmed = source.trim_start();
    if !careful_validation && !trimmed.starts_with("new ") {
        return false;
    }
    if careful_validation && !(trimmed.starts_with("new ") || trimmed.starts_with('{')) {
        return false;
    }
    with_expression(source, |expression, _| {
        Ok(match expression {
            Expression::NewExpression(_) => true,
            Expression::ObjectExpression(_) => careful_validation,
            _ => false,
        })
    })
    .unwrap_or(false)
}
