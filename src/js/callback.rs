//! JavaScript functions and classes carried inside option values.

use std::fmt;

use oxc_ast::ast::{
    ArrowFunctionExpression, Class, ClassElement, Expression, FormalParameters, Function,
    FunctionBody, MethodDefinitionKind, Statement,
};
use oxc_span::GetSpan;
use smallvec::SmallVec;

use crate::core::{OptionField, OptionValue};
use crate::error::{OptionsError, OptionsResult};

use super::convert::property_key;
use super::parse::{span_text, with_expression};

/// A JavaScript callback such as a formatter or an event handler.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallbackFunction {
    pub function_name: Option<String>,
    pub arguments: SmallVec<[String; 4]>,
    /// Statements between the braces, without surrounding whitespace.
    pub body: Option<String>,
    pub is_arrow: bool,
    pub is_async: bool,
}

impl CallbackFunction {
    #[must_use]
    pub fn new<I, S>(function_name: Option<&str>, arguments: I, body: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function_name: function_name.map(str::to_owned),
            arguments: arguments.into_iter().map(Into::into).collect(),
            body: normalize_body(body),
            is_arrow: false,
            is_async: false,
        }
    }

    #[must_use]
    pub fn arrow<I, S>(arguments: I, body: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_arrow: true,
            ..Self::new(None, arguments, body)
        }
    }

    /// Parses function or arrow-function source.
    pub fn from_js_literal(source: &str) -> OptionsResult<Self> {
        with_expression(source, |expression, text| match expression {
            Expression::FunctionExpression(function) => Self::from_function(function, text),
            Expression::ArrowFunctionExpression(arrow) => Ok(Self::from_arrow(arrow, text)),
            other => Err(OptionsError::InvalidData(format!(
                "expected a javascript function, got `{}`",
                span_text(other.span(), text)
            ))),
        })
    }

    pub(crate) fn from_function(function: &Function<'_>, source: &str) -> OptionsResult<Self> {
        if function.generator {
            return Err(OptionsError::UnsupportedJs(format!(
                "generator functions are not supported: `{}`",
                span_text(function.span, source)
            )));
        }
        Ok(Self {
            function_name: function.id.as_ref().map(|id| id.name.to_string()),
            arguments: parameter_sources(&function.params, source),
            body: function
                .body
                .as_ref()
                .and_then(|body| normalize_body(block_text(body, source))),
            is_arrow: false,
            is_async: function.r#async,
        })
    }

    pub(crate) fn from_arrow(arrow: &ArrowFunctionExpression<'_>, source: &str) -> Self {
        let body = match arrow.body.statements.first() {
            Some(Statement::ExpressionStatement(statement)) if arrow.expression => {
                let text = span_text(statement.expression.span(), source).trim();
                normalize_body(&format!("return {text};"))
            }
            _ => normalize_body(block_text(&arrow.body, source)),
        };
        Self {
            function_name: None,
            arguments: parameter_sources(&arrow.params, source),
            body,
            is_arrow: true,
            is_async: arrow.r#async,
        }
    }

    #[must_use]
    pub fn to_js_literal(&self) -> String {
        let arguments = self.arguments.join(", ");
        let body = match &self.body {
            Some(body) => format!("{{\n{body}\n}}"),
            None => "{}".to_owned(),
        };
        let prefix = if self.is_async { "async " } else { "" };
        if self.is_arrow {
            return format!("{prefix}({arguments}) => {body}");
        }
        match &self.function_name {
            Some(name) => format!("{prefix}function {name}({arguments}) {body}"),
            None => format!("{prefix}function({arguments}) {body}"),
        }
    }

    /// Method form used inside class bodies: `name(args) { ... }`.
    fn to_method_literal(&self) -> String {
        let name = self.function_name.as_deref().unwrap_or("method");
        let arguments = self.arguments.join(", ");
        let prefix = if self.is_async { "async " } else { "" };
        match &self.body {
            Some(body) => format!("{prefix}{name}({arguments}) {{\n{body}\n}}"),
            None => format!("{prefix}{name}({arguments}) {{}}"),
        }
    }
}

fn parameter_sources(params: &FormalParameters<'_>, source: &str) -> SmallVec<[String; 4]> {
    let mut arguments: SmallVec<[String; 4]> = params
        .items
        .iter()
        .map(|param| span_text(param.span, source).trim().to_owned())
        .collect();
    if let Some(rest) = &params.rest {
        arguments.push(span_text(rest.span, source).trim().to_owned());
    }
    arguments
}

/// Statements between the braces of a block body.
fn block_text<'s>(body: &FunctionBody<'_>, source: &'s str) -> &'s str {
    let text = span_text(body.span, source).trim();
    text.strip_prefix('{')
        .and_then(|inner| inner.strip_suffix('}'))
        .unwrap_or(text)
}

fn normalize_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl fmt::Display for CallbackFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_literal())
    }
}

impl OptionField for CallbackFunction {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Callback(self.clone())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Callback(callback) => Ok(callback.clone()),
            OptionValue::String(source) | OptionValue::Expression(source) => {
                Self::from_js_literal(source).map_err(|err| {
                    OptionsError::invalid_value(field, format!("not a javascript function: {err}"))
                })
            }
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected function, got {}", other.kind_name()),
            )),
        }
    }
}

/// A JavaScript class definition with methods.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsClass {
    pub class_name: String,
    pub extends: Option<String>,
    /// Methods; each carries its name in `function_name`.
    pub methods: Vec<CallbackFunction>,
}

impl JsClass {
    pub fn new(class_name: &str, methods: Vec<CallbackFunction>) -> OptionsResult<Self> {
        let class = Self {
            class_name: class_name.to_owned(),
            extends: None,
            methods,
        };
        class.validate()?;
        Ok(class)
    }

    #[must_use]
    pub fn with_extends(mut self, parent: &str) -> Self {
        self.extends = Some(parent.to_owned());
        self
    }

    pub fn validate(&self) -> OptionsResult<()> {
        if self.class_name.trim().is_empty() {
            return Err(OptionsError::invalid_value(
                "class_name",
                "javascript classes must be named",
            ));
        }
        if let Some(method) = self.methods.iter().find(|m| m.function_name.is_none()) {
            return Err(OptionsError::invalid_value(
                "methods",
                format!("method `{}` has no name", method.to_js_literal()),
            ));
        }
        Ok(())
    }

    pub fn from_js_literal(source: &str) -> OptionsResult<Self> {
        with_expression(source, |expression, text| match expression {
            Expression::ClassExpression(class) => Self::from_class(class, text),
            other => Err(OptionsError::InvalidData(format!(
                "expected a javascript class, got `{}`",
                span_text(other.span(), text)
            ))),
        })
    }

    /// Accepts named classes whose body holds only plain and async methods.
    pub(crate) fn from_class(class: &Class<'_>, source: &str) -> OptionsResult<Self> {
        let mut methods = Vec::with_capacity(class.body.body.len());
        for element in &class.body.body {
            let ClassElement::MethodDefinition(method) = element else {
                return Err(OptionsError::UnsupportedJs(format!(
                    "only methods are supported in class bodies, found `{}`",
                    span_text(element.span(), source)
                )));
            };
            let unsupported = if method.r#static {
                Some("static methods")
            } else if matches!(method.kind, MethodDefinitionKind::Get | MethodDefinitionKind::Set) {
                Some("accessors")
            } else if method.computed {
                Some("computed method names")
            } else {
                None
            };
            if let Some(what) = unsupported {
                return Err(OptionsError::UnsupportedJs(format!(
                    "{what} are not supported: `{}`",
                    span_text(method.span, source)
                )));
            }
            let mut callback = CallbackFunction::from_function(&method.value, source)?;
            callback.function_name = property_key(&method.key);
            methods.push(callback);
        }
        let parsed = Self {
            class_name: class
                .id
                .as_ref()
                .map(|id| id.name.to_string())
                .unwrap_or_default(),
            extends: class
                .super_class
                .as_ref()
                .map(|parent| span_text(parent.span(), source).trim().to_owned()),
            methods,
        };
        parsed.validate()?;
        Ok(parsed)
    }

    #[must_use]
    pub fn to_js_literal(&self) -> String {
        let mut out = format!("class {}", self.class_name);
        if let Some(parent) = &self.extends {
            out.push_str(" extends ");
            out.push_str(parent);
        }
        out.push_str(" {\n");
        for method in &self.methods {
            out.push_str(&method.to_method_literal());
            out.push('\n');
        }
        out.push('}');
        out
    }
}

impl fmt::Display for JsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_literal())
    }
}

impl OptionField for JsClass {
    fn to_option_value(&self) -> OptionValue {
        OptionValue::Class(self.clone())
    }

    fn from_option_value(value: &OptionValue, field: &str) -> OptionsResult<Self> {
        match value {
            OptionValue::Class(class) => Ok(class.clone()),
            OptionValue::String(source) | OptionValue::Expression(source) => {
                Self::from_js_literal(source)
            }
            other => Err(OptionsError::invalid_value(
                field,
                format!("expected class, got {}", other.kind_name()),
            )),
        }
    }
}
