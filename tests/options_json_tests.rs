use approx::assert_relative_eq;
use highcharts_options::core::{Nullable, OptionValue};
use highcharts_options::options::{
    AxisType, ChartOptions, ColumnSeries, DataPoint, Language, LineSeries, NumberOrString,
    OneOrMany, PieSeries, PlotBand, Series, SeriesKind, XAxis, YAxis,
};
use highcharts_options::{HighchartsOptions, OptionNode, OptionsError};

#[test]
fn compact_json_contains_only_set_values() {
    let options = HighchartsOptions::new().with_title("Hello");

    assert_eq!(
        options.to_json().expect("json"),
        r#"{"title":{"text":"Hello"}}"#
    );
    assert_eq!(HighchartsOptions::new().to_json().expect("json"), "{}");
}

#[test]
fn json_round_trip_keeps_every_setting() {
    let options = HighchartsOptions::new()
        .with_title("Browser share")
        .with_chart(ChartOptions::default().with_size(640.0, "60%"))
        .with_x_axis(XAxis::default().with_type(AxisType::Datetime))
        .with_y_axis(
            YAxis::default()
                .with_title("Share")
                .with_extremes(0.0, 100.0)
                .with_plot_band(PlotBand::between(20.0, 40.0).with_color("#fcffc5")),
        )
        .with_series(ColumnSeries::default().with_name("2024").with_data([
            DataPoint::named("Chrome", 64.5),
            DataPoint::named("Edge", 5.2).with_color("#0078d7"),
        ]))
        .with_series(PieSeries::default().with_id("share").with_data([1.0, 2.0]));

    let json = options.to_json_pretty().expect("json");
    let parsed = HighchartsOptions::from_json_str(&json).expect("parse");

    let series = parsed.series.as_deref().expect("series");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].kind(), SeriesKind::Column);
    assert_eq!(series[1].kind(), SeriesKind::Pie);
    assert!(parsed.series_by_id("share").is_some());
    assert_eq!(parsed.to_map(), options.to_map());
    let chart = parsed.chart.expect("chart");
    assert_eq!(
        chart.height,
        Some(Nullable::Value(NumberOrString::Text("60%".to_owned())))
    );
}

#[test]
fn json_keeps_declared_key_order() {
    let json = HighchartsOptions::new()
        .with_title("First")
        .with_subtitle("Second")
        .with_credits(highcharts_options::options::Credits::disabled())
        .to_json()
        .expect("json");

    let credits = json.find("\"credits\"").expect("credits");
    let subtitle = json.find("\"subtitle\"").expect("subtitle");
    let title = json.find("\"title\"").expect("title");
    assert!(credits < subtitle && subtitle < title);
}

#[test]
fn snake_case_keys_are_accepted_on_input() {
    let options = HighchartsOptions::from_json_str(
        r#"{
            "plot_options": {"series": {"line_width": 3}},
            "x_axis": {"tick_interval": 5, "categories": ["a", "b"]},
            "lang_ignored": true
        }"#,
    )
    .expect("parse");

    let series = options
        .plot_options
        .and_then(|plot| plot.series)
        .expect("series options");
    assert_eq!(series.line_width, Some(3.0));
    let Some(OneOrMany::One(axis)) = options.x_axis else {
        panic!("expected a single x axis");
    };
    assert_eq!(axis.generic.tick_interval, Some(5.0));
}

#[test]
fn multiple_axes_are_read_as_arrays() {
    let options = HighchartsOptions::from_json_str(
        r#"{"yAxis": [{"title": {"text": "Rainfall"}}, {"title": {"text": "Temperature"}, "opposite": true}]}"#,
    )
    .expect("parse");

    let axes = options.y_axis.expect("axes");
    assert_eq!(axes.len(), 2);
    assert!(matches!(axes, OneOrMany::Many(_)));
}

#[test]
fn invalid_values_name_the_field() {
    let err = HighchartsOptions::from_json_str(r#"{"xAxis": {"type": "spiral"}}"#)
        .expect_err("unknown axis type");
    let OptionsError::InvalidValue { field, .. } = err else {
        panic!("expected an invalid value error, got {err:?}");
    };
    assert_eq!(field, "type");

    assert!(HighchartsOptions::from_json_str(r#"{"title": {"text": true}}"#).is_err());
    assert!(HighchartsOptions::from_json_str(r#"{"xAxis": {"tickInterval": 0}}"#).is_err());
    assert!(HighchartsOptions::from_json_str(r#"{"xAxis": {"min": 5, "max": 1}}"#).is_err());
    assert!(HighchartsOptions::from_json_str(r#"{"chart": {"borderWidth": -1}}"#).is_err());
    assert!(HighchartsOptions::from_json_str("[]").is_err());
}

#[test]
fn duplicate_series_ids_are_rejected() {
    let options = HighchartsOptions::new()
        .with_series(LineSeries::default().with_id("a"))
        .with_series(LineSeries::default().with_id("a"));

    assert!(matches!(
        options.validate(),
        Err(OptionsError::InvalidValue { .. })
    ));
    let json = r#"{"series": [{"id": "x"}, {"id": "x", "type": "area"}]}"#;
    assert!(HighchartsOptions::from_json_str(json).is_err());
}

#[test]
fn series_dispatch_on_type_and_default_to_line() {
    let options = HighchartsOptions::from_json_str(
        r##"{"series": [
            {"name": "untyped", "data": [1, 2]},
            {"type": "areaspline", "data": [[0, 1], [1, null]]},
            {"type": "bar", "data": [{"y": 3, "name": "Q1", "color": "#ccc"}]}
        ]}"##,
    )
    .expect("parse");

    let series = options.series.expect("series");
    assert_eq!(series[0].kind(), SeriesKind::Line);
    assert_eq!(series[0].name(), Some("untyped"));
    assert_eq!(series[1].kind(), SeriesKind::AreaSpline);
    assert_eq!(series[2].kind(), SeriesKind::Bar);

    let Series::AreaSpline(area) = &series[1] else {
        panic!("expected area spline");
    };
    let points = area.base.data.as_deref().expect("data");
    assert_eq!(points[1].x, Some(1.0));
    assert_eq!(points[1].y, Some(Nullable::Null));

    let Series::Bar(bar) = &series[2] else {
        panic!("expected bar");
    };
    let point = &bar.base.data.as_deref().expect("data")[0];
    assert_eq!(point.name.as_deref(), Some("Q1"));
    assert!(point.color.is_some());

    assert!(HighchartsOptions::from_json_str(r#"{"series": [{"type": "radar"}]}"#).is_err());
}

#[test]
fn data_points_use_the_shortest_form() {
    assert_eq!(DataPoint::y(4.0).to_array(), Some(OptionValue::Number(4.0)));
    assert_eq!(
        DataPoint::xy(1.0, 2.0).to_array(),
        Some(OptionValue::Array(vec![
            OptionValue::Number(1.0),
            OptionValue::Number(2.0)
        ]))
    );
    assert_eq!(DataPoint::gap().to_array(), Some(OptionValue::Null));
    assert_eq!(DataPoint::y(1.0).with_id("p1").to_array(), None);

    let err = DataPoint::from_json_str(r#"{"y": "high"}"#).expect_err("string y");
    assert!(matches!(err, OptionsError::InvalidValue { .. }));
}

#[test]
fn chart_margin_number_expands_to_four_sides() {
    let chart = ChartOptions::from_json_str(r#"{"margin": 10, "height": null}"#).expect("chart");

    assert_eq!(chart.margin, Some(vec![10.0; 4]));
    assert_eq!(chart.height, Some(Nullable::Null));
    assert!(ChartOptions::from_json_str(r#"{"spacing": [1, 2, 3, 4, 5]}"#).is_err());
    assert!(ChartOptions::from_json_str(r#"{"margin": []}"#).is_err());
}

#[test]
fn language_checks_name_counts() {
    let lang = Language::default()
        .with_separators(",", ".")
        .with_weekdays(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"])
        .expect("seven weekdays");
    assert_eq!(lang.thousands_sep.as_deref(), Some("."));

    assert!(Language::default().with_months(["Jan", "Feb"]).is_err());
    let parsed = Language::from_json_str(r#"{"downloadCSV": "CSV herunterladen"}"#).expect("lang");
    assert_eq!(parsed.download_csv.as_deref(), Some("CSV herunterladen"));
    let snake = Language::from_json_str(r#"{"download_csv": "CSV"}"#).expect("lang");
    assert_eq!(snake.download_csv.as_deref(), Some("CSV"));
}

#[test]
fn integral_numbers_are_written_without_fraction() {
    let json = YAxis::default().with_extremes(0.0, 2.5).to_json().expect("json");

    assert!(json.contains("\"min\":0"));
    assert!(json.contains("\"max\":2.5"));
    let parsed = YAxis::from_json_str(&json).expect("axis");
    let max = parsed.generic.max.and_then(|max| max.value().copied()).expect("max");
    assert_relative_eq!(max, 2.5);
}

#[test]
fn timed_and_decimal_points_convert_to_numbers() {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid date");
    let point = DataPoint::timed(time, 7.5);
    assert_eq!(point.x, Some(1_704_067_200_000.0));
    assert_eq!(
        point.to_array(),
        Some(OptionValue::Array(vec![
            OptionValue::Number(1_704_067_200_000.0),
            OptionValue::Number(7.5)
        ]))
    );

    let amount = DataPoint::from_decimal(Decimal::new(12_345, 2)).expect("decimal");
    let y = amount.y.and_then(|y| y.value().copied()).expect("y");
    assert_relative_eq!(y, 123.45);
}
