use highcharts_options::core::{OptionMap, OptionValue, TrimMode, trim_map};
use highcharts_options::js::{format_js_number, parse_options_map, quote_js_string};
use highcharts_options::options::{DataPoint, LineSeries, Series};
use highcharts_options::{HighchartsOptions, OptionNode};
use proptest::prelude::*;

fn parse_single(literal: &str) -> OptionValue {
    let map = parse_options_map(&format!("{{ v: {literal} }}")).expect("parse literal");
    map["v"].clone()
}

fn sparse_map(entries: &[(String, Option<f64>)]) -> OptionMap {
    entries
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Some(number) => OptionValue::Number(*number),
                None => OptionValue::Undefined,
            };
            (key.clone(), value)
        })
        .collect()
}

proptest! {
    #[test]
    fn quoted_strings_parse_back_unchanged(text in "[ -~\\n\\t\u{e9}\u{4e2d}]{0,48}") {
        let parsed = parse_single(&quote_js_string(&text));

        prop_assert_eq!(parsed, OptionValue::String(text));
    }

    #[test]
    fn emitted_numbers_parse_back_unchanged(value in -1.0e12f64..1.0e12) {
        let parsed = parse_single(&format_js_number(value));

        prop_assert_eq!(parsed, OptionValue::Number(value));
    }

    #[test]
    fn trimming_is_idempotent(
        entries in prop::collection::vec(("[a-z]{1,6}", prop::option::of(-1.0e6f64..1.0e6)), 0..16),
        nested in prop::option::of(-10.0f64..10.0)
    ) {
        let mut map = sparse_map(&entries);
        map.insert(
            "nested".to_owned(),
            OptionValue::Object(sparse_map(&[("inner".to_owned(), nested)])),
        );

        let once = trim_map(&map, TrimMode::Native);
        let twice = trim_map(&once, TrimMode::Native);

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.values().all(|value| !value.is_undefined()));
        prop_assert_eq!(once.contains_key("nested"), nested.is_some());
    }

    #[test]
    fn series_data_survives_literal_and_json(
        points in prop::collection::vec((prop::option::of(-1.0e6f64..1.0e6), -1.0e6f64..1.0e6), 1..24)
    ) {
        let data: Vec<DataPoint> = points
            .iter()
            .map(|(x, y)| match x {
                Some(x) => DataPoint::xy(*x, *y),
                None => DataPoint::y(*y),
            })
            .collect();
        let options = HighchartsOptions::new()
            .with_series(Series::Line(LineSeries::default().with_name("p").with_data(data.clone())));

        let from_js = HighchartsOptions::from_js_literal(
            &options.to_js_literal().expect("literal"),
        )
        .expect("parse literal");
        let from_json = HighchartsOptions::from_json_str(&options.to_json().expect("json"))
            .expect("parse json");

        for parsed in [from_js, from_json] {
            let series = parsed.series.expect("series");
            prop_assert_eq!(series[0].base().data.as_deref(), Some(data.as_slice()));
        }
    }
}
