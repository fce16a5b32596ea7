use approx::assert_relative_eq;
use highcharts_options::core::{
    Color, Gradient, GradientStop, LinearGradient, Nullable, OptionValue, Pattern, PatternOptions,
    RadialGradient, map_from_json_str, validate_color,
};
use highcharts_options::{OptionNode, OptionsError};

fn resolve(value: OptionValue) -> Color {
    match validate_color(&value, "color").expect("valid colour") {
        Some(Nullable::Value(color)) => color,
        other => panic!("expected a colour, got {other:?}"),
    }
}

#[test]
fn plain_strings_stay_plain() {
    assert_eq!(resolve(OptionValue::from("#2f7ed8")), Color::plain("#2f7ed8"));
    assert_eq!(
        resolve(OptionValue::from("rgba(0, 0, 0, 0.5)")),
        Color::plain("rgba(0, 0, 0, 0.5)")
    );
}

#[test]
fn unset_and_null_are_distinguished() {
    assert_eq!(validate_color(&OptionValue::Undefined, "color").expect("ok"), None);
    assert_eq!(
        validate_color(&OptionValue::Null, "color").expect("ok"),
        Some(Nullable::Null)
    );
}

#[test]
fn empty_strings_and_numbers_are_rejected() {
    assert!(matches!(
        validate_color(&OptionValue::from("   "), "color"),
        Err(OptionsError::InvalidValue { .. })
    ));
    assert!(validate_color(&OptionValue::Number(3.0), "color").is_err());
}

#[test]
fn objects_with_gradient_keys_become_gradients() {
    let map = map_from_json_str(
        r##"{"linearGradient": {"x1": 0, "y1": 0, "x2": 0, "y2": 1},
            "stops": [[0, "#003399"], [1, "#3366AA"]]}"##,
    )
    .expect("json");

    let Color::Gradient(gradient) = resolve(OptionValue::Object(map)) else {
        panic!("expected gradient");
    };
    let geometry = gradient.linear_gradient.expect("linear geometry");
    assert_eq!(geometry.y2, Some(1.0));
    let stops = gradient.stops.expect("stops");
    assert_eq!(stops.len(), 2);
    assert_relative_eq!(stops[1].offset, 1.0);
    assert_eq!(stops[1].color, "#3366AA");
}

#[test]
fn gradient_strings_are_parsed_as_json_or_javascript() {
    let json = r##"{"radialGradient": {"cx": 0.5, "cy": 0.5, "r": 0.5}, "stops": [[0, "#fff"], [1, "#000"]]}"##;
    let js = "{ linearGradient: { x1: 0, y1: 0, x2: 1, y2: 0 }, stops: [[0, '#fff'], [0.5, '#ccc']] }";

    let Color::Gradient(radial) = resolve(OptionValue::from(json)) else {
        panic!("expected radial gradient");
    };
    assert!(radial.radial_gradient.is_some());

    let Color::Gradient(linear) = resolve(OptionValue::from(js)) else {
        panic!("expected linear gradient");
    };
    assert_eq!(linear.linear_gradient, Some(LinearGradient::new(0.0, 0.0, 1.0, 0.0)));
    assert_relative_eq!(linear.stops.expect("stops")[1].offset, 0.5);
}

#[test]
fn strings_that_only_mention_gradient_keys_fall_back_to_plain() {
    let text = "url(#stops-fill)";
    assert_eq!(resolve(OptionValue::from(text)), Color::plain(text));
}

#[test]
fn patterns_accept_both_key_spellings_and_emit_pattern() {
    let legacy = map_from_json_str(
        r#"{"patternOptions": {"path": {"d": "M 0 0 L 10 10"}, "width": 10, "height": 10}, "patternIndex": 2}"#,
    )
    .expect("json");

    let Color::Pattern(pattern) = resolve(OptionValue::Object(legacy)) else {
        panic!("expected pattern");
    };
    let options = pattern.pattern_options.clone().expect("pattern options");
    assert_eq!(options.path.as_deref(), Some("M 0 0 L 10 10"));
    assert_eq!(pattern.pattern_index, Some(2));

    let emitted = pattern.to_map();
    assert!(emitted.contains_key("pattern"));
    assert!(!emitted.contains_key("patternOptions"));
}

#[test]
fn gradient_validation_rejects_bad_geometry_and_stops() {
    let both = Gradient {
        linear_gradient: Some(LinearGradient::new(0.0, 0.0, 1.0, 1.0)),
        radial_gradient: Some(RadialGradient::default()),
        stops: None,
    };
    assert!(both.validate().is_err());

    let out_of_range = map_from_json_str(r##"{"stops": [[1.5, "#fff"]]}"##).expect("json");
    assert!(Gradient::from_map(&out_of_range).is_err());

    let bad_pattern = PatternOptions {
        opacity: Some(1.5),
        ..PatternOptions::default()
    };
    assert!(bad_pattern.validate().is_err());
}

#[test]
fn colors_round_trip_through_javascript_literals() {
    let gradient = Gradient::linear(
        LinearGradient::new(0.0, 0.0, 0.0, 1.0),
        vec![GradientStop::new(0.0, "#ffffff"), GradientStop::new(1.0, "#000000")],
    );
    let literal = gradient.to_js_literal().expect("literal");
    assert!(literal.contains("linearGradient"));
    assert!(literal.contains("[0, '#ffffff']"));

    let parsed = Gradient::from_js_literal(&literal).expect("parse");
    assert_eq!(parsed, gradient);

    let pattern = Pattern {
        pattern_options: Some(PatternOptions {
            path: Some("M 0 0 L 5 5".to_owned()),
            width: Some(5.0),
            ..PatternOptions::default()
        }),
        ..Pattern::default()
    };
    let parsed = Pattern::from_js_literal(&pattern.to_js_literal().expect("literal")).expect("parse");
    assert_eq!(parsed, pattern);
}
