use highcharts_options::core::{CssStyle, JsDict, OptionValue, StyleValue};
use highcharts_options::options::Title;
use highcharts_options::{OptionNode, OptionsError};

#[test]
fn keys_keep_insertion_order() {
    let style = CssStyle::new()
        .with("fontSize", "14px".into())
        .with("color", "#333".into())
        .with("opacity", StyleValue::Number(0.8));

    let keys: Vec<&String> = style.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["fontSize", "color", "opacity"]);
    assert_eq!(style.get("opacity"), Some(&StyleValue::Number(0.8)));
}

#[test]
fn empty_keys_and_null_values_are_rejected_by_default() {
    let mut style = CssStyle::new();
    assert!(matches!(
        style.insert("", "red".into()),
        Err(OptionsError::InvalidData(_))
    ));

    let mut strict: JsDict<OptionValue> = JsDict::new();
    assert!(strict.insert("fill", OptionValue::Null).is_err());

    let mut lenient: JsDict<OptionValue> = JsDict::new().allowing_empty_values();
    lenient.insert("fill", OptionValue::Null).expect("null allowed");
    assert_eq!(lenient.len(), 1);
    assert_eq!(lenient.remove("fill"), Some(OptionValue::Null));
    assert!(lenient.is_empty());
}

#[test]
fn builder_skips_invalid_entries() {
    let style = CssStyle::new().with("", "ignored".into()).with("color", "red".into());

    assert_eq!(style.len(), 1);
}

#[test]
fn styles_round_trip_inside_nodes() {
    let title = Title::new("Styled").with_style(
        CssStyle::new()
            .with("font-weight", "bold".into())
            .with("fontSize", StyleValue::Number(18.0)),
    );

    let literal = title.to_js_literal().expect("literal");
    assert!(literal.contains("'font-weight': 'bold'"));
    assert!(literal.contains("fontSize: 18"));

    let from_js = Title::from_js_literal(&literal).expect("parse literal");
    let from_json = Title::from_json_str(&title.to_json().expect("json")).expect("parse json");
    assert_eq!(from_js, title);
    assert_eq!(from_json, title);
}

#[test]
fn style_values_must_be_text_or_numbers() {
    let err = CssStyle::from_json_str(r#"{"color": ["red"]}"#).expect_err("array value");

    let OptionsError::InvalidValue { field, .. } = err else {
        panic!("expected invalid value, got {err:?}");
    };
    assert_eq!(field, "color");
}

#[test]
fn null_style_entries_are_dropped_when_reading_literals() {
    let title = Title::from_js_literal("{ text: 'Sales', style: { color: null, fontSize: '12px' } }")
        .expect("parse literal");

    let style = title.base.style.expect("style");
    assert_eq!(style.len(), 1);
    assert_eq!(style.get("color"), None);
    assert_eq!(style.get("fontSize"), Some(&StyleValue::from("12px")));

    let lenient = JsDict::<OptionValue>::from_json_str(r#"{"fill": null}"#).expect("dict");
    assert_eq!(lenient.get("fill"), Some(&OptionValue::Null));
}
