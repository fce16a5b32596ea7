use highcharts_options::options::{ChartOptions, Language};
use highcharts_options::{
    CallbackFunction, Chart, ChartConstructor, HighchartsOptions, OptionNode, OptionsError,
    SharedOptions,
};

fn titled(text: &str) -> HighchartsOptions {
    HighchartsOptions::new().with_title(text)
}

#[test]
fn chart_script_waits_for_the_dom() {
    let chart = Chart::new("container", titled("T"));

    assert_eq!(
        chart.to_js_literal(),
        "document.addEventListener('DOMContentLoaded', function() {\n\
         Highcharts.chart('container',\n{\n  title: {\n    text: 'T'\n  }\n});\n});"
    );
}

#[test]
fn chart_script_round_trips_with_variable_and_callback() {
    let chart = Chart::new("sales", titled("Sales"))
        .with_variable_name("salesChart")
        .with_constructor(ChartConstructor::StockChart)
        .with_callback(CallbackFunction::new(
            None,
            ["chart"],
            "console.log(chart.series.length);",
        ));

    let script = chart.to_js_literal();
    assert!(script.contains("const salesChart = Highcharts.stockChart('sales',"));

    let parsed = Chart::from_js_literal(&script).expect("parse");
    assert_eq!(parsed, chart);
}

#[test]
fn bare_constructor_calls_are_accepted() {
    let parsed = Chart::from_js_literal(
        "var c = Highcharts.chart('target', { chart: { type: 'bar' }, title: { text: 'Fruit' } });",
    )
    .expect("parse");

    assert_eq!(parsed.container.as_deref(), Some("target"));
    assert_eq!(parsed.variable_name.as_deref(), Some("c"));
    assert_eq!(
        parsed.options.chart.and_then(|chart| chart.r#type).as_deref(),
        Some("bar")
    );
}

#[test]
fn missing_or_null_container_defers_to_render_to() {
    let source = "Highcharts.chart({ chart: { renderTo: 'box' } });";
    let parsed = Chart::from_js_literal(source).expect("parse");
    assert_eq!(parsed.container, None);
    assert_eq!(
        parsed.options.chart.as_ref().and_then(|chart| chart.render_to.as_deref()),
        Some("box")
    );

    let chart = Chart {
        container: None,
        ..Chart::from_options(HighchartsOptions::new().with_chart(ChartOptions {
            render_to: Some("box".to_owned()),
            ..ChartOptions::default()
        }))
    };
    let script = chart.to_js_literal();
    assert!(script.contains("Highcharts.chart(null,"));
    assert_eq!(Chart::from_js_literal(&script).expect("parse"), chart);
}

#[test]
fn unknown_constructors_and_bad_names_are_rejected() {
    assert!(Chart::from_js_literal("Highcharts.pieChart('a', {});").is_err());
    assert!(Chart::from_js_literal("Chart.chart('a', {});").is_err());

    let chart = Chart::from_options(titled("x")).with_variable_name("my-chart");
    assert!(matches!(
        chart.validate(),
        Err(OptionsError::InvalidValue { .. })
    ));
}

#[test]
fn default_container_and_html_page() {
    let chart = Chart::from_options(titled("Page"));
    assert_eq!(chart.container.as_deref(), Some("highcharts_target_div"));

    let page = chart.to_html_page("https://code.highcharts.com/highcharts.js");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<script src=\"https://code.highcharts.com/highcharts.js\"></script>"));
    assert!(page.contains("<div id=\"highcharts_target_div\"></div>"));
    assert!(page.contains("Highcharts.chart('highcharts_target_div',"));
}

#[test]
fn chart_json_round_trip() {
    let chart = Chart::new("json-target", titled("Stored"))
        .with_variable_name("stored")
        .with_constructor(ChartConstructor::GanttChart);

    let json = chart.to_json().expect("json");
    assert!(json.contains("\"constructor\":\"ganttChart\""));
    assert_eq!(Chart::from_json_str(&json).expect("parse"), chart);

    let headless = Chart {
        container: None,
        ..Chart::from_options(titled("No target"))
    };
    let json = headless.to_json_pretty().expect("json");
    assert_eq!(Chart::from_json_str(&json).expect("parse"), headless);
}

#[test]
fn shared_options_emit_set_options_with_lang() {
    let shared = SharedOptions::new(titled("Default title")).with_lang(
        Language::default()
            .with_separators(",", ".")
            .with_weekdays(["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"])
            .expect("weekdays"),
    );

    let script = shared.to_js_literal();
    assert!(script.starts_with("Highcharts.setOptions({"));
    assert!(script.ends_with("});"));
    assert!(script.contains("lang: {"));
    assert!(script.contains("decimalPoint: ','"));

    let parsed = SharedOptions::from_js_literal(&script).expect("parse");
    assert_eq!(parsed, shared);
    assert!(SharedOptions::from_js_literal("Highcharts.chart('a', {});").is_err());
}

#[test]
fn empty_shared_options_still_emit_a_call() {
    assert_eq!(
        SharedOptions::default().to_js_literal(),
        "Highcharts.setOptions({});"
    );
}
