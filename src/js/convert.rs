use oxc_ast::ast::{
    ArrayExpressionElement, Expression, ObjectExpression, ObjectPropertyKind, PropertyKey,
};
use oxc_span::GetSpan;

use crate::core::{OptionMap, OptionValue};
use crate::error::{OptionsError, OptionsResult};

use super::callback::{CallbackFunction, JsClass};
use super::literal::format_js_number;
use super::parse::span_text;

/// Deepest object/array nesting accepted when reading a literal.
pub const MAX_NESTING: usize = 128;

/// Rebuilds an option value from a parsed JavaScript expression.
///
/// `source` is the text the expression spans refer to. Literals, objects,
/// arrays, functions and classes are converted structurally; anything else
/// is kept as an [`OptionValue::Expression`] holding its source text.
pub(crate) fn convert_expression(
    expression: &Expression<'_>,
    source: &str,
    depth: usize,
) -> OptionsResult<OptionValue> {
    if depth > MAX_NESTING {
        return Err(OptionsError::UnsupportedJs(format!(
            "literal nests deeper than {MAX_NESTING} levels"
        )));
    }
    Ok(match expression {
        Expression::ObjectExpression(object) => {
            OptionValue::Object(convert_object(object, source, depth)?)
        }
        Expression::ArrayExpression(array) => OptionValue::Array(
            array
                .elements
                .iter()
                .map(|element| match element {
                    ArrayExpressionElement::Elision(_) => Ok(OptionValue::Undefined),
                    ArrayExpressionElement::SpreadElement(spread) => {
                        Err(OptionsError::UnsupportedJs(format!(
                            "spread elements are not supported: `{}`",
                            span_text(spread.span, source)
                        )))
                    }
                    item => match item.as_expression() {
                        Some(item) => convert_expression(item, source, depth + 1),
                        None => Ok(OptionValue::Undefined),
                    },
                })
                .collect::<OptionsResult<Vec<_>>>()?,
        ),
        Expression::StringLiteral(literal) => OptionValue::String(literal.value.to_string()),
        Expression::NumericLiteral(literal) => OptionValue::Number(literal.value),
        Expression::BooleanLiteral(literal) => OptionValue::Bool(literal.value),
        Expression::NullLiteral(_) => OptionValue::Null,
        Expression::Identifier(identifier) => match identifier.name.as_str() {
            "undefined" => OptionValue::Undefined,
            "NaN" => OptionValue::Number(f64::NAN),
            "Infinity" => OptionValue::Number(f64::INFINITY),
            name => OptionValue::Expression(name.to_owned()),
        },
        Expression::TemplateLiteral(template) if template.expressions.is_empty() => {
            match template.quasis.first().and_then(|quasi| quasi.value.cooked.as_ref()) {
                Some(cooked) => OptionValue::String(cooked.to_string()),
                None => raw_expression(expression, source),
            }
        }
        Expression::UnaryExpression(unary) => {
            let sign = match unary.operator.as_str() {
                "-" => -1.0,
                "+" => 1.0,
                _ => return Ok(raw_expression(expression, source)),
            };
            match &unary.argument {
                Expression::NumericLiteral(literal) => OptionValue::Number(sign * literal.value),
                Expression::Identifier(identifier) if identifier.name.as_str() == "Infinity" => {
                    OptionValue::Number(sign * f64::INFINITY)
                }
                _ => raw_expression(expression, source),
            }
        }
        Expression::ParenthesizedExpression(inner)
            if matches!(
                inner.expression,
                Expression::ObjectExpression(_)
                    | Expression::ArrayExpression(_)
                    | Expression::FunctionExpression(_)
                    | Expression::ArrowFunctionExpression(_)
                    | Expression::ClassExpression(_)
            ) =>
        {
            convert_expression(&inner.expression, source, depth + 1)?
        }
        Expression::FunctionExpression(function) => {
            OptionValue::Callback(CallbackFunction::from_function(function, source)?)
        }
        Expression::ArrowFunctionExpression(arrow) => {
            OptionValue::Callback(CallbackFunction::from_arrow(arrow, source))
        }
        Expression::ClassExpression(class) => {
            OptionValue::Class(JsClass::from_class(class, source)?)
        }
        _ => raw_expression(expression, source),
    })
}

fn raw_expression(expression: &Expression<'_>, source: &str) -> OptionValue {
    OptionValue::Expression(span_text(expression.span(), source).to_owned())
}

fn convert_object(
    object: &ObjectExpression<'_>,
    source: &str,
    depth: usize,
) -> OptionsResult<OptionMap> {
    let mut map = OptionMap::with_capacity(object.properties.len());
    for property in &object.properties {
        let ObjectPropertyKind::ObjectProperty(property) = property else {
            return Err(OptionsError::UnsupportedJs(format!(
                "spread properties are not supported: `{}`",
                span_text(property.span(), source)
            )));
        };
        if property.computed {
            return Err(OptionsError::UnsupportedJs(format!(
                "computed property keys are not supported: `{}`",
                span_text(property.key.span(), source)
            )));
        }
        let key = property_key(&property.key).ok_or_else(|| {
            OptionsError::UnsupportedJs(format!(
                "unsupported property key `{}`",
                span_text(property.key.span(), source)
            ))
        })?;
        if key.is_empty() {
            return Err(OptionsError::UnsupportedJs(format!(
                "empty property key in `{}`",
                span_text(property.span, source)
            )));
        }
        let value = convert_expression(&property.value, source, depth + 1)?;
        map.insert(key, value);
    }
    Ok(map)
}

/// Name of a static property key: identifiers, strings and numbers.
pub(crate) fn property_key(key: &PropertyKey<'_>) -> Option<String> {
    match key {
        PropertyKey::StaticIdentifier(identifier) => Some(identifier.name.to_string()),
        PropertyKey::StringLiteral(literal) => Some(literal.value.to_string()),
        PropertyKey::NumericLiteral(literal) => Some(format_js_number(literal.value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_NESTING;
    use crate::error::OptionsError;
    use crate::js::convert_js_literal;

    #[test]
    fn test_nesting_limit() {
        let depth = MAX_NESTING + 10;
        let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));

        assert!(matches!(
            convert_js_literal(&source),
            Err(OptionsError::UnsupportedJs(_))
        ));

        let shallow = format!("{}1{}", "[".repeat(8), "]".repeat(8));
        assert!(convert_js_literal(&shallow).is_ok());
    }

    #[test]
    fn test_numeric_and_quoted_keys() {
        let value = convert_js_literal("{ 1: 'a', 'two words': 2 }").expect("parse");
        let map = value.as_object().expect("object");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["1", "two words"]);
    }

    #[test]
    fn test_spread_and_computed_keys_are_unsupported() {
        assert!(matches!(
            convert_js_literal("{ ...base }"),
            Err(OptionsError::UnsupportedJs(_))
        ));
        assert!(matches!(
            convert_js_literal("{ [key]: 1 }"),
            Err(OptionsError::UnsupportedJs(_))
        ));
    }
}
