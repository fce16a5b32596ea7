use criterion::{Criterion, criterion_group, criterion_main};
use highcharts_options::options::{DataPoint, LineSeries, XAxis, YAxis};
use highcharts_options::{CallbackFunction, HighchartsOptions, OptionNode};
use std::hint::black_box;

fn sample_options(points: usize) -> HighchartsOptions {
    let series = LineSeries::default()
        .with_name("generated")
        .with_data((0..points).map(|i| DataPoint::xy(i as f64, (i as f64 * 0.1).sin())));
    let mut options = HighchartsOptions::new()
        .with_title("Benchmark")
        .with_x_axis(XAxis::default().with_title("x"))
        .with_y_axis(YAxis::default().with_title("y"))
        .with_series(series);
    options.tooltip = Some(
        highcharts_options::options::Tooltip::default().with_formatter(CallbackFunction::new(
            None,
            Vec::<String>::new(),
            "return this.y.toFixed(2);",
        )),
    );
    options
}

fn bench_emit_js_literal_2k(c: &mut Criterion) {
    let options = sample_options(2_000);
    c.bench_function("emit_js_literal_2k", |b| {
        b.iter(|| {
            let _ = black_box(&options).to_js_literal().expect("literal");
        })
    });
}

fn bench_parse_js_literal_2k(c: &mut Criterion) {
    let literal = sample_options(2_000).to_js_literal().expect("literal");
    c.bench_function("parse_js_literal_2k", |b| {
        b.iter(|| {
            let _ = HighchartsOptions::from_js_literal(black_box(&literal)).expect("parse");
        })
    });
}

fn bench_json_round_trip_2k(c: &mut Criterion) {
    let options = sample_options(2_000);
    c.bench_function("json_round_trip_2k", |b| {
        b.iter(|| {
            let json = black_box(&options).to_json().expect("json");
            let _ = HighchartsOptions::from_json_str(&json).expect("from json");
        })
    });
}

criterion_group!(
    benches,
    bench_emit_js_literal_2k,
    bench_parse_js_literal_2k,
    bench_json_round_trip_2k
);
criterion_main!(benches);
