use highcharts_options::core::{OptionValue, consolidate, merge_maps, untrimmed};
use highcharts_options::options::{
    AreaOptions, AreaSeries, AxisTitle, DataPoint, GenericAxis, SeriesOptions, Title, XAxis,
};
use highcharts_options::OptionNode;

#[test]
fn derived_layer_overrides_only_defined_values() {
    let derived = untrimmed([
        ("color", OptionValue::from("#ff0000")),
        ("width", OptionValue::Undefined),
    ]);
    let base = untrimmed([
        ("color", OptionValue::from("#000000")),
        ("width", OptionValue::Number(2.0)),
        ("dash", OptionValue::from("Dot")),
    ]);

    let merged = consolidate([derived, base]);

    assert_eq!(merged["color"], OptionValue::from("#ff0000"));
    assert_eq!(merged["width"], OptionValue::Number(2.0));
    assert_eq!(merged["dash"], OptionValue::from("Dot"));
}

#[test]
fn key_order_starts_from_the_most_basic_layer() {
    let derived = untrimmed([
        ("extra", OptionValue::Bool(true)),
        ("shared", OptionValue::Number(1.0)),
    ]);
    let middle = untrimmed([("middle", OptionValue::Bool(true))]);
    let base = untrimmed([
        ("shared", OptionValue::Number(0.0)),
        ("base", OptionValue::Bool(true)),
    ]);

    let merged = consolidate([derived, middle, base]);

    assert_eq!(
        merged.keys().collect::<Vec<_>>(),
        vec!["shared", "base", "middle", "extra"]
    );
    assert_eq!(merged["shared"], OptionValue::Number(1.0));
}

#[test]
fn composed_nodes_emit_parent_and_own_settings() {
    let title = Title::new("Quarterly revenue").with_margin(12.0);
    let map = title.to_map();

    assert_eq!(map["text"], OptionValue::from("Quarterly revenue"));
    assert_eq!(map["margin"], OptionValue::Number(12.0));
    assert_eq!(map.keys().last().map(String::as_str), Some("margin"));

    let axis = XAxis {
        generic: GenericAxis {
            title: Some(AxisTitle::new("Month")),
            ..GenericAxis::default()
        },
        ..XAxis::default()
    }
    .with_categories(["Jan", "Feb"]);
    let axis_map = axis.to_map();
    assert!(axis_map.contains_key("title"));
    assert!(axis_map.contains_key("categories"));
    assert!(!axis_map.contains_key("crosshair"));
}

#[test]
fn series_layers_base_specific_and_generic_options() {
    let series = AreaSeries::default()
        .with_name("Temperature")
        .with_data([1.0, 2.0, 3.0])
        .with_generic(SeriesOptions {
            line_width: Some(3.0),
            ..SeriesOptions::default()
        })
        .with_specific(AreaOptions {
            fill_opacity: Some(0.25),
            ..AreaOptions::default()
        });

    let map = series.to_map();

    assert_eq!(map["name"], OptionValue::from("Temperature"));
    assert_eq!(map["lineWidth"], OptionValue::Number(3.0));
    assert_eq!(map["fillOpacity"], OptionValue::Number(0.25));
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    let position = |key: &str| keys.iter().position(|k| *k == key).expect("key present");
    assert!(position("lineWidth") < position("fillOpacity"));
    assert!(position("fillOpacity") < position("data"));

    let rebuilt = AreaSeries::from_map(&map).expect("rebuild series");
    assert_eq!(rebuilt, series);
    assert_eq!(
        rebuilt.base.data.as_deref().map(<[DataPoint]>::len),
        Some(3)
    );
}

#[test]
fn merge_maps_respects_overwrite_flag() {
    let mut target = untrimmed([
        ("text", OptionValue::from("Original")),
        (
            "style",
            OptionValue::Object(untrimmed([("color", OptionValue::from("#111"))])),
        ),
    ]);
    let source = untrimmed([
        ("text", OptionValue::from("Replacement")),
        ("align", OptionValue::from("left")),
        (
            "style",
            OptionValue::Object(untrimmed([
                ("color", OptionValue::from("#222")),
                ("fontSize", OptionValue::from("12px")),
            ])),
        ),
    ]);

    let mut kept = target.clone();
    merge_maps(&mut kept, &source, false);
    assert_eq!(kept["text"], OptionValue::from("Original"));
    assert_eq!(kept["align"], OptionValue::from("left"));
    let style = kept["style"].as_object().expect("style");
    assert_eq!(style["color"], OptionValue::from("#111"));
    assert_eq!(style["fontSize"], OptionValue::from("12px"));

    merge_maps(&mut target, &source, true);
    assert_eq!(target["text"], OptionValue::from("Replacement"));
    assert_eq!(
        target["style"].as_object().expect("style")["color"],
        OptionValue::from("#222")
    );
}

#[test]
fn copy_onto_fills_missing_settings() {
    let defaults = Title::new("Default").with_margin(20.0);
    let specific = Title::new("Specific");

    let merged = defaults.copy_onto(&specific, false).expect("copy");
    assert_eq!(merged.base.text.as_deref(), Some("Specific"));
    assert_eq!(merged.margin, Some(20.0));

    let overwritten = defaults.copy_onto(&specific, true).expect("copy");
    assert_eq!(overwritten.base.text.as_deref(), Some("Default"));
}
