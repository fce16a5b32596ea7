//! JavaScript parsing on top of `oxc_parser`.
//!
//! Every entry point owns its arena: the source is parsed, the tree is
//! walked into owned option values, and the arena is dropped before
//! returning. A source only counts as parsed when oxc reports no errors.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Expression, Program, Statement, VariableDeclaration};
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{Parser, ParserReturn};
use oxc_span::{GetSpan, SourceType, Span};
use tracing::debug;

use crate::core::{OptionValue, is_js_identifier};
use crate::error::{OptionsError, OptionsResult};

use super::convert::convert_expression;

/// A `Highcharts.<constructor>(...)` call found in page source.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCall {
    pub variable_name: Option<String>,
    pub constructor: String,
    pub arguments: Vec<OptionValue>,
}

/// Source text covered by `span`; empty when the span falls outside `source`.
pub(crate) fn span_text(span: Span, source: &str) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

fn parse_program<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    prefix_len: usize,
    original_len: usize,
) -> OptionsResult<Program<'a>> {
    let ParserReturn {
        program,
        errors,
        panicked,
        ..
    } = Parser::new(allocator, source, SourceType::mjs()).parse();
    if let Some(error) = errors.first() {
        return Err(diagnostic_error(error, prefix_len, original_len));
    }
    if panicked {
        return Err(OptionsError::JsParse {
            message: "parser stopped before the end of the source".to_owned(),
            offset: 0,
        });
    }
    Ok(program)
}

fn diagnostic_error(error: &OxcDiagnostic, prefix_len: usize, original_len: usize) -> OptionsError {
    let offset = error
        .labels
        .as_ref()
        .and_then(|labels| labels.first())
        .map_or(0, |label| label.offset());
    OptionsError::JsParse {
        message: error.to_string(),
        offset: offset.saturating_sub(prefix_len).min(original_len),
    }
}

fn statements<'p, 'a>(program: &'p Program<'a>) -> Vec<&'p Statement<'a>> {
    program
        .body
        .iter()
        .filter(|statement| !matches!(statement, Statement::EmptyStatement(_)))
        .collect()
}

/// Parses `source` as exactly one expression, optionally followed by `;`, and
/// hands the tree to `visit` together with the text its spans refer to.
pub(crate) fn with_expression<T, F>(source: &str, visit: F) -> OptionsResult<T>
where
    F: for<'a> FnOnce(&Expression<'a>, &str) -> OptionsResult<T>,
{
    let body = source.trim_end().trim_end_matches(';');
    // Parenthesized so `{...}`, `function() {}` and `class {}` read as expressions.
    let wrapped = format!("({body}\n)");
    let allocator = Allocator::default();
    let program = parse_program(&allocator, &wrapped, 1, source.len())?;
    let items = statements(&program);
    let expression = match items.as_slice() {
        [Statement::ExpressionStatement(statement)] => match &statement.expression {
            Expression::ParenthesizedExpression(inner) => &inner.expression,
            _ => return Err(single_expression_error()),
        },
        _ => return Err(single_expression_error()),
    };
    visit(expression, &wrapped)
}

fn single_expression_error() -> OptionsError {
    OptionsError::JsParse {
        message: "expected a single javascript expression".to_owned(),
        offset: 0,
    }
}

/// Parses and converts one JavaScript expression.
pub fn convert_js_literal(source: &str) -> OptionsResult<OptionValue> {
    with_expression(source, |expression, text| convert_expression(expression, text, 0))
}

/// Parses `[var|let|const] name = <expr>;`, `name = <expr>;` or a bare
/// expression, returning the bound name and the converted value.
pub fn parse_declaration(source: &str) -> OptionsResult<(Option<String>, OptionValue)> {
    if source.trim_start().starts_with('{') {
        return convert_js_literal(source).map(|value| (None, value));
    }
    let allocator = Allocator::default();
    let program = parse_program(&allocator, source, 0, source.len())?;
    let items = statements(&program);
    match items.as_slice() {
        [Statement::VariableDeclaration(declaration)] => {
            let (name, init) = single_declarator(declaration, source)?;
            Ok((Some(name), convert_expression(init, source, 0)?))
        }
        [Statement::ExpressionStatement(statement)] => match &statement.expression {
            Expression::AssignmentExpression(assignment) => {
                let name = binding_name(assignment.left.span(), source)?;
                Ok((Some(name), convert_expression(&assignment.right, source, 0)?))
            }
            expression => Ok((None, convert_expression(expression, source, 0)?)),
        },
        _ => Err(OptionsError::UnsupportedJs(
            "expected an object literal or a single variable declaration".to_owned(),
        )),
    }
}

fn single_declarator<'p, 'a>(
    declaration: &'p VariableDeclaration<'a>,
    source: &str,
) -> OptionsResult<(String, &'p Expression<'a>)> {
    let mut declarators = declaration.declarations.iter();
    let (Some(declarator), None) = (declarators.next(), declarators.next()) else {
        return Err(OptionsError::UnsupportedJs(
            "expected exactly one variable declarator".to_owned(),
        ));
    };
    let name = binding_name(declarator.id.span(), source)?;
    let init = declarator.init.as_ref().ok_or_else(|| {
        OptionsError::UnsupportedJs(format!("variable `{name}` has no initializer"))
    })?;
    Ok((name, init))
}

fn binding_name(span: Span, source: &str) -> OptionsResult<String> {
    let name = span_text(span, source).trim();
    if is_js_identifier(name) {
        Ok(name.to_owned())
    } else {
        Err(OptionsError::UnsupportedJs(format!(
            "`{name}` is not a plain variable name"
        )))
    }
}

/// Parses a chart constructor call, optionally bound to a variable and
/// optionally wrapped in a
/// `document.addEventListener('DOMContentLoaded', function() { ... })` handler.
pub fn parse_chart_call(source: &str) -> OptionsResult<ChartCall> {
    let allocator = Allocator::default();
    let program = parse_program(&allocator, source, 0, source.len())?;
    find_chart_call(&statements(&program), source)
}

fn find_chart_call(statements: &[&Statement<'_>], source: &str) -> OptionsResult<ChartCall> {
    let [statement] = statements else {
        return Err(OptionsError::UnsupportedJs(format!(
            "expected one `Highcharts.<constructor>(...)` statement, found {}",
            statements.len()
        )));
    };
    match statement {
        Statement::ExpressionStatement(statement) => match &statement.expression {
            Expression::CallExpression(call)
                if is_member_call(&call.callee, "document", "addEventListener") =>
            {
                let handler = call
                    .arguments
                    .get(1)
                    .and_then(|argument| argument.as_expression());
                let body = match handler {
                    Some(Expression::FunctionExpression(function)) => function.body.as_ref(),
                    Some(Expression::ArrowFunctionExpression(arrow)) if !arrow.expression => {
                        Some(&arrow.body)
                    }
                    _ => None,
                };
                let Some(body) = body else {
                    return Err(OptionsError::UnsupportedJs(
                        "event handler must be a function with a block body".to_owned(),
                    ));
                };
                let inner: Vec<&Statement<'_>> = body
                    .statements
                    .iter()
                    .filter(|statement| !matches!(statement, Statement::EmptyStatement(_)))
                    .collect();
                find_chart_call(&inner, source)
            }
            Expression::AssignmentExpression(assignment) => {
                let name = binding_name(assignment.left.span(), source)?;
                chart_call(&assignment.right, Some(name), source)
            }
            expression => chart_call(expression, None, source),
        },
        Statement::VariableDeclaration(declaration) => {
            let (name, init) = single_declarator(declaration, source)?;
            chart_call(init, Some(name), source)
        }
        other => Err(OptionsError::UnsupportedJs(format!(
            "expected a `Highcharts.<constructor>(...)` call, found `{}`",
            span_text(other.span(), source)
        ))),
    }
}

fn is_member_call(callee: &Expression<'_>, object: &str, property: &str) -> bool {
    match callee {
        Expression::StaticMemberExpression(member) => {
            member.property.name.as_str() == property
                && matches!(&member.object, Expression::Identifier(id) if id.name.as_str() == object)
        }
        _ => false,
    }
}

fn chart_call(
    expression: &Expression<'_>,
    variable_name: Option<String>,
    source: &str,
) -> OptionsResult<ChartCall> {
    let call = match expression {
        Expression::CallExpression(call) => call,
        other => {
            return Err(OptionsError::UnsupportedJs(format!(
                "expected a `Highcharts.<constructor>(...)` call, found `{}`",
                span_text(other.span(), source)
            )));
        }
    };
    let constructor = match &call.callee {
        Expression::StaticMemberExpression(member)
            if matches!(&member.object, Expression::Identifier(id) if id.name.as_str() == "Highcharts") =>
        {
            member.property.name.to_string()
        }
        other => {
            return Err(OptionsError::UnsupportedJs(format!(
                "expected `Highcharts.<constructor>`, found `{}`",
                span_text(other.span(), source)
            )));
        }
    };
    let arguments = call
        .arguments
        .iter()
        .map(|argument| match argument.as_expression() {
            Some(expression) => convert_expression(expression, source, 0),
            None => Err(OptionsError::UnsupportedJs(format!(
                "spread arguments are not supported: `{}`",
                span_text(argument.span(), source)
            ))),
        })
        .collect::<OptionsResult<Vec<_>>>()?;
    if let Some(name) = &variable_name {
        debug!(variable = %name, constructor = %constructor, "chart call bound to a variable");
    }
    Ok(ChartCall {
        variable_name,
        constructor,
        arguments,
    })
}
