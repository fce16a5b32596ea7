use highcharts_options::core::{OptionField, OptionValue};
use highcharts_options::{CallbackFunction, JsClass, OptionsError};

#[test]
fn parses_named_function_with_arguments() {
    let callback = CallbackFunction::from_js_literal(
        "function labelFormatter(value, index) {\n  return value + '%';\n}",
    )
    .expect("function");

    assert_eq!(callback.function_name.as_deref(), Some("labelFormatter"));
    assert_eq!(callback.arguments.as_slice(), ["value", "index"]);
    assert_eq!(callback.body.as_deref(), Some("return value + '%';"));
    assert!(!callback.is_arrow);
}

#[test]
fn arrow_expression_bodies_become_return_statements() {
    let callback = CallbackFunction::from_js_literal("(x, y = 2) => x * y").expect("arrow");

    assert!(callback.is_arrow);
    assert_eq!(callback.arguments.as_slice(), ["x", "y = 2"]);
    assert_eq!(callback.body.as_deref(), Some("return x * y;"));
    assert_eq!(callback.to_js_literal(), "(x, y = 2) => {\nreturn x * y;\n}");
}

#[test]
fn single_parameter_arrow_and_async_functions() {
    let arrow = CallbackFunction::from_js_literal("point => { return point.y; }").expect("arrow");
    assert_eq!(arrow.arguments.as_slice(), ["point"]);
    assert_eq!(arrow.body.as_deref(), Some("return point.y;"));

    let loader = CallbackFunction::from_js_literal("async function() { await load(); }")
        .expect("async function");
    assert!(loader.is_async);
    assert_eq!(
        loader.to_js_literal(),
        "async function() {\nawait load();\n}"
    );
}

#[test]
fn empty_bodies_are_emitted_as_empty_blocks() {
    let noop = CallbackFunction::new(None, Vec::<String>::new(), "   ");

    assert_eq!(noop.body, None);
    assert_eq!(noop.to_js_literal(), "function() {}");
}

#[test]
fn emitted_functions_parse_back_to_the_same_callback() {
    let callback = CallbackFunction::new(Some("onClick"), ["event"], "alert(event.point.y);");

    let reparsed = CallbackFunction::from_js_literal(&callback.to_js_literal()).expect("parse");

    assert_eq!(reparsed, callback);
}

#[test]
fn non_functions_are_rejected() {
    assert!(matches!(
        CallbackFunction::from_js_literal("{ a: 1 }"),
        Err(OptionsError::InvalidData(_))
    ));
    assert!(CallbackFunction::from_option_value(&OptionValue::Number(1.0), "formatter").is_err());
}

#[test]
fn string_values_are_accepted_as_function_source() {
    let value = OptionValue::from("function() { return this.value; }");

    let callback = CallbackFunction::from_option_value(&value, "formatter").expect("callback");

    assert_eq!(callback.body.as_deref(), Some("return this.value;"));
    assert_eq!(callback.to_option_value(), OptionValue::Callback(callback));
}

#[test]
fn parses_classes_with_methods_and_heritage() {
    let source = "class Tracker extends Base {\n  constructor(chart) { this.chart = chart; }\n  track(point) { return point.x; }\n}";

    let class = JsClass::from_js_literal(source).expect("class");

    assert_eq!(class.class_name, "Tracker");
    assert_eq!(class.extends.as_deref(), Some("Base"));
    assert_eq!(class.methods.len(), 2);
    assert_eq!(class.methods[0].function_name.as_deref(), Some("constructor"));
    assert_eq!(class.methods[1].arguments.as_slice(), ["point"]);

    let reparsed = JsClass::from_js_literal(&class.to_js_literal()).expect("reparse");
    assert_eq!(reparsed, class);
}

#[test]
fn classes_need_names_and_plain_methods() {
    assert!(JsClass::from_js_literal("class { run() {} }").is_err());
    assert!(JsClass::from_js_literal("class Store { static create() { return 1; } }").is_err());
    assert!(JsClass::from_js_literal("class Store { count = 0; }").is_err());

    let unnamed = CallbackFunction::new(None, ["a"], "return a;");
    assert!(matches!(
        JsClass::new("Store", vec![unnamed]),
        Err(OptionsError::InvalidValue { .. })
    ));
}

#[test]
fn class_builder_emits_methods() {
    let class = JsClass::new(
        "Counter",
        vec![CallbackFunction::new(Some("increment"), ["step"], "this.count += step;")],
    )
    .expect("class")
    .with_extends("Highcharts.Series");

    assert_eq!(
        class.to_js_literal(),
        "class Counter extends Highcharts.Series {\nincrement(step) {\nthis.count += step;\n}\n}"
    );
}
