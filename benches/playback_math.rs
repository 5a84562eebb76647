// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use hls_grid::domain::video::BufferedMarks;
use hls_grid::video_player::{format_time, parse_time_to_seconds};
use std::hint::black_box;

fn time_format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_format");

    group.bench_function("format_time_long", |b| {
        b.iter(|| format_time(black_box(3723.9)));
    });

    group.bench_function("parse_time_hms", |b| {
        b.iter(|| parse_time_to_seconds(black_box("1:02:03")));
    });

    group.bench_function("parse_time_malformed", |b| {
        b.iter(|| parse_time_to_seconds(black_box("ab:cd:ef")));
    });

    group.finish();
}

fn buffered_marks_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffered_marks");

    // Recomputed on every progress event, so it has to stay trivial.
    group.bench_function("compute", |b| {
        b.iter(|| BufferedMarks::compute(black_box(5400.0)));
    });

    group.bench_function("fractions", |b| {
        let marks = BufferedMarks::compute(5400.0);
        b.iter(|| black_box(&marks).fractions());
    });

    group.finish();
}

criterion_group!(benches, time_format_benchmark, buffered_marks_benchmark);
criterion_main!(benches);
