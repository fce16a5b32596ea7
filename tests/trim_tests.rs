use highcharts_options::core::{OptionMap, OptionValue, TrimMode, trim_array, trim_map, untrimmed};
use highcharts_options::CallbackFunction;

fn object(entries: OptionMap) -> OptionValue {
    OptionValue::Object(entries)
}

#[test]
fn trim_drops_undefined_and_keeps_explicit_null() {
    let map = untrimmed([
        ("text", OptionValue::from("Revenue")),
        ("align", OptionValue::Undefined),
        ("max", OptionValue::Null),
    ]);

    let trimmed = trim_map(&map, TrimMode::Native);

    assert_eq!(trimmed.len(), 2);
    assert_eq!(trimmed.get("text"), Some(&OptionValue::from("Revenue")));
    assert_eq!(trimmed.get("max"), Some(&OptionValue::Null));
    assert!(!trimmed.contains_key("align"));
}

#[test]
fn trim_removes_objects_and_arrays_that_become_empty() {
    let map = untrimmed([
        ("style", object(untrimmed([("color", OptionValue::Undefined)]))),
        ("categories", OptionValue::Array(Vec::new())),
        (
            "labels",
            object(untrimmed([
                ("enabled", OptionValue::Bool(true)),
                ("format", OptionValue::Undefined),
            ])),
        ),
    ]);

    let trimmed = trim_map(&map, TrimMode::Native);

    assert_eq!(trimmed.keys().collect::<Vec<_>>(), vec!["labels"]);
    let labels = trimmed["labels"].as_object().expect("labels object");
    assert_eq!(labels.len(), 1);
    assert_eq!(labels.get("enabled"), Some(&OptionValue::Bool(true)));
}

#[test]
fn trim_keeps_array_positions() {
    let items = vec![
        OptionValue::Number(1.0),
        OptionValue::Undefined,
        object(untrimmed([("y", OptionValue::Undefined)])),
        OptionValue::Number(4.0),
    ];

    let trimmed = trim_array(&items, TrimMode::Native);

    assert_eq!(trimmed.len(), 4);
    assert_eq!(trimmed[1], OptionValue::Null);
    assert_eq!(trimmed[2], OptionValue::Object(OptionMap::new()));
}

#[test]
fn json_mode_drops_javascript_only_values() {
    let callback = CallbackFunction::new(None, ["value"], "return value;");
    let map = untrimmed([
        ("formatter", OptionValue::Callback(callback.clone())),
        ("start", OptionValue::Expression("new Date(2020, 0, 1)".to_owned())),
        ("enabled", OptionValue::Bool(false)),
        (
            "handlers",
            OptionValue::Array(vec![OptionValue::Callback(callback), OptionValue::Number(2.0)]),
        ),
    ]);

    let native = trim_map(&map, TrimMode::Native);
    let json = trim_map(&map, TrimMode::Json);

    assert_eq!(native.len(), 4);
    assert_eq!(json.keys().collect::<Vec<_>>(), vec!["enabled", "handlers"]);
    assert_eq!(
        json["handlers"],
        OptionValue::Array(vec![OptionValue::Number(2.0)])
    );
}

#[test]
fn trimming_preserves_key_order() {
    let map = untrimmed([
        ("z", OptionValue::Number(1.0)),
        ("a", OptionValue::Undefined),
        ("m", OptionValue::Number(2.0)),
        ("b", OptionValue::Number(3.0)),
    ]);

    let trimmed = trim_map(&map, TrimMode::Native);

    assert_eq!(trimmed.keys().collect::<Vec<_>>(), vec!["z", "m", "b"]);
}
