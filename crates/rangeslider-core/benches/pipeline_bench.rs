//! Benchmarks for the options → data → state pipeline.
//!
//! Run with: cargo bench -p rangeslider-core --bench pipeline_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use rangeslider_core::convert::{data_to_state, options_to_data};
use rangeslider_core::data::Data;
use rangeslider_core::id::TooltipId;
use rangeslider_core::options::Options;
use rangeslider_core::validators::check_range_slider_options;
use serde_json::json;

fn options_with(handles: usize) -> Options {
    let values: Vec<f64> = (0..handles).map(|i| (i * 1000 / handles) as f64).collect();
    Options::default()
        .value(values)
        .max(1000.0)
        .intervals(vec![true, false])
}

/// Data where every other pair of tooltips collides.
fn colliding_data(handles: usize) -> Data {
    let mut data = options_to_data(&options_with(handles));
    data.tooltip_collisions = (0..handles / 2)
        .step_by(2)
        .map(|i| [TooltipId::new(2 * i), TooltipId::new(2 * i + 1)].into_iter().collect())
        .collect();
    data
}

fn bench_validate(c: &mut Criterion) {
    let raw = json!({
        "value": [10, 20, 30, 40],
        "min": 0,
        "max": 100,
        "step": 1,
        "orientation": "horizontal",
        "tooltips": [true, false, true, false],
        "intervals": [false, true, false, true, false],
        "grid": { "isVisible": true, "numCells": [4, 5] },
        "cssClass": "range-slider"
    });
    c.bench_function("validate/four_handles", |b| {
        b.iter(|| check_range_slider_options(black_box(&raw)))
    });
}

fn bench_options_to_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("options_to_data");
    for handles in [1usize, 10, 100] {
        let options = options_with(handles);
        group.throughput(Throughput::Elements(handles as u64));
        group.bench_with_input(BenchmarkId::from_parameter(handles), &options, |b, o| {
            b.iter(|| options_to_data(black_box(o)))
        });
    }
    group.finish();
}

fn bench_data_to_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_to_state");
    for handles in [1usize, 10, 100] {
        let data = colliding_data(handles);
        group.throughput(Throughput::Elements(handles as u64));
        group.bench_with_input(BenchmarkId::from_parameter(handles), &data, |b, d| {
            b.iter(|| data_to_state(black_box(d)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_validate,
    bench_options_to_data,
    bench_data_to_state
);
criterion_main!(benches);
