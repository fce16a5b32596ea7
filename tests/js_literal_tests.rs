use highcharts_options::core::{OptionValue, untrimmed};
use highcharts_options::js::{
    assemble_js_literal, is_js_function_or_class, is_js_object, parse_options_map,
    quote_js_string,
};
use highcharts_options::options::{
    Credits, DataPoint, LineSeries, Series, SeriesKind, Title, Tooltip, XAxis,
};
use highcharts_options::{
    CallbackFunction, HighchartsOptions, LiteralConfig, OptionNode, OptionsError,
};

#[test]
fn emits_indented_object_literal_with_bare_keys() {
    let options = HighchartsOptions::new().with_title("Hello");

    let literal = options.to_js_literal().expect("literal");

    assert_eq!(literal, "{\n  title: {\n    text: 'Hello'\n  }\n}");
}

#[test]
fn empty_nodes_have_no_literal() {
    assert_eq!(HighchartsOptions::new().to_js_literal(), None);
    assert_eq!(Title::default().to_js_literal(), None);
}

#[test]
fn keys_are_quoted_when_needed_or_requested() {
    let map = untrimmed([
        ("font-size", OptionValue::from("12px")),
        ("color", OptionValue::from("#333")),
    ]);

    let literal = assemble_js_literal(&map, &LiteralConfig::default()).expect("literal");
    assert!(literal.contains("'font-size': '12px'"));
    assert!(literal.contains("  color: '#333'"));

    let quoted = LiteralConfig::new().with_keys_as_strings(true);
    let literal = assemble_js_literal(&map, &quoted).expect("literal");
    assert!(literal.contains("'color': '#333'"));
}

#[test]
fn strings_are_escaped_for_script_tags() {
    assert_eq!(quote_js_string("it's"), "'it\\'s'");
    assert_eq!(quote_js_string("line\nbreak"), "'line\\nbreak'");
    assert_eq!(quote_js_string("</script>"), "'<\\/script>'");
}

#[test]
fn function_and_class_sources_are_emitted_verbatim() {
    let map = untrimmed([
        ("formatter", OptionValue::from("function() { return this.y; }")),
        ("label", OptionValue::from("function of time")),
        ("renderer", OptionValue::from("class Renderer { draw() { return 1; } }")),
    ]);

    let literal = assemble_js_literal(&map, &LiteralConfig::default()).expect("literal");

    assert!(literal.contains("formatter: function() { return this.y; }"));
    assert!(literal.contains("label: 'function of time'"));
    assert!(literal.contains("renderer: class Renderer {"));
}

#[test]
fn detects_functions_classes_and_object_expressions() {
    assert!(is_js_function_or_class("(a, b) => a + b"));
    assert!(is_js_function_or_class("function load(url) { return fetch(url); }"));
    assert!(!is_js_function_or_class("functional"));
    assert!(!is_js_function_or_class("a => "));

    assert!(is_js_object("new Date(2024, 0, 1)", false));
    assert!(!is_js_object("{ a: 1 }", false));
    assert!(is_js_object("{ a: 1 }", true));
    assert!(!is_js_object("newsletter", true));
}

#[test]
fn arrays_of_scalars_stay_inline_and_holes_become_undefined() {
    let map = untrimmed([(
        "data",
        OptionValue::Array(vec![
            OptionValue::Number(1.0),
            OptionValue::Undefined,
            OptionValue::Number(2.5),
            OptionValue::Null,
        ]),
    )]);

    let literal = assemble_js_literal(&map, &LiteralConfig::default()).expect("literal");

    assert_eq!(literal, "{\n  data: [1, undefined, 2.5, null]\n}");
}

#[test]
fn special_numbers_are_written_as_javascript() {
    let map = untrimmed([
        ("a", OptionValue::Number(f64::NAN)),
        ("b", OptionValue::Number(f64::INFINITY)),
        ("c", OptionValue::Number(f64::NEG_INFINITY)),
        ("d", OptionValue::Number(-0.5)),
    ]);

    let literal = assemble_js_literal(&map, &LiteralConfig::default()).expect("literal");
    let parsed = parse_options_map(&literal).expect("parse");

    assert!(literal.contains("a: NaN"));
    assert!(literal.contains("c: -Infinity"));
    assert!(parsed["a"].as_f64().expect("number").is_nan());
    assert_eq!(parsed["b"], OptionValue::Number(f64::INFINITY));
    assert_eq!(parsed["c"], OptionValue::Number(f64::NEG_INFINITY));
    assert_eq!(parsed["d"], OptionValue::Number(-0.5));
}

#[test]
fn parses_declarations_comments_and_raw_expressions() {
    let source = r#"
        // chart defaults
        var options = {
            title: { text: "Sales" },   /* inline */
            credits: { enabled: false, },
            xAxis: { min: new Date(2020, 0, 1), max: undefined },
            colors: Highcharts.getOptions().colors,
        };
    "#;

    let map = parse_options_map(source).expect("parse");

    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        vec!["title", "credits", "xAxis", "colors"]
    );
    let x_axis = map["xAxis"].as_object().expect("axis");
    assert_eq!(
        x_axis["min"],
        OptionValue::Expression("new Date(2020, 0, 1)".to_owned())
    );
    assert_eq!(x_axis["max"], OptionValue::Undefined);
    assert_eq!(
        map["colors"],
        OptionValue::Expression("Highcharts.getOptions().colors".to_owned())
    );
}

#[test]
fn options_round_trip_through_javascript() {
    let mut options = HighchartsOptions::new()
        .with_title("Fruit consumption")
        .with_subtitle("2024")
        .with_x_axis(XAxis::default().with_categories(["Apples", "Bananas", "Oranges"]))
        .with_credits(Credits::disabled())
        .with_tooltip(
            Tooltip::shared().with_formatter(CallbackFunction::new(
                None,
                Vec::<String>::new(),
                "return '<b>' + this.x + '</b>';",
            )),
        )
        .with_series(
            LineSeries::default()
                .with_name("Jane")
                .with_data([1.0, 0.0, 4.0]),
        );
    options.add_series(Series::Spline(
        LineSeries::default()
            .with_name("John")
            .with_data([DataPoint::named("Apples", 5.0), DataPoint::gap(), DataPoint::xy(2.0, 3.0)]),
    ));

    let literal = options.to_js_literal().expect("literal");
    let parsed = HighchartsOptions::from_js_literal(&literal).expect("parse");

    assert_eq!(parsed, {
        let mut expected = options.clone();
        for series in expected.series.iter_mut().flatten() {
            match series {
                Series::Line(line) => line.base.r#type = Some(SeriesKind::Line),
                Series::Spline(line) => line.base.r#type = Some(SeriesKind::Spline),
                _ => {}
            }
        }
        expected
    });
    assert!(literal.contains("formatter: function() {\nreturn '<b>' + this.x + '</b>';\n}"));
    assert!(literal.contains("data: [['Apples', 5], null, [2, 3]]"));
}

#[test]
fn malformed_literals_are_rejected() {
    let err = HighchartsOptions::from_js_literal("{ title: { text: 'x' }").expect_err("unbalanced");
    assert!(matches!(err, OptionsError::JsParse { .. }));

    let err = HighchartsOptions::from_js_literal("[1, 2]").expect_err("not an object");
    assert!(matches!(err, OptionsError::InvalidData(_)));
}

#[test]
fn function_detection_requires_valid_bodies() {
    assert!(!is_js_function_or_class("function() { this is ::: not javascript }"));
    assert!(!is_js_function_or_class("class Broken { method() { return ) } }"));
    assert!(!is_js_object("new Date(2024, 0", false));

    let literal = HighchartsOptions::new()
        .with_title("function() { this is ::: not javascript }")
        .to_js_literal()
        .expect("literal");
    assert!(literal.contains("text: 'function() { this is ::: not javascript }'"));
}

#[test]
fn titles_that_read_as_javascript_survive_a_round_trip() {
    let options = HighchartsOptions::new().with_title("new Users");
    let literal = options.to_js_literal().expect("literal");
    assert!(literal.contains("text: new Users"));
    assert_eq!(
        HighchartsOptions::from_js_literal(&literal).expect("parse"),
        options
    );

    let arrow = HighchartsOptions::new().with_title("Revenue => Profit");
    let parsed = HighchartsOptions::from_js_literal(&arrow.to_js_literal().expect("literal"))
        .expect("parse");
    let text = parsed.title.as_ref().and_then(|title| title.base.text.clone()).expect("text");
    assert_eq!(text, "(Revenue) => {\nreturn Profit;\n}");

    let again = HighchartsOptions::from_js_literal(&parsed.to_js_literal().expect("literal"))
        .expect("reparse");
    assert_eq!(again, parsed);
}

#[test]
fn deeply_nested_literals_are_rejected() {
    let depth = highcharts_options::js::MAX_NESTING + 20;
    let source = format!(
        "{{ data: {}0{} }}",
        "[".repeat(depth),
        "]".repeat(depth)
    );

    assert!(matches!(
        HighchartsOptions::from_js_literal(&source),
        Err(OptionsError::UnsupportedJs(_))
    ));
}
