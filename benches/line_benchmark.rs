#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use line_raster::prelude::*;
use std::hint::black_box;

fn line_length_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_line");
    let mut buffer = PixelBuffer::new(4096, 4096);

    for length in [10, 100, 1_000, 4_000] {
        group.throughput(Throughput::Elements(length as u64 + 1));
        group.bench_with_input(BenchmarkId::new("shallow", length), &length, |b, &length| {
            b.iter(|| {
                draw_line(&mut buffer, Color::BLACK, 0, 0, black_box(length), black_box(length / 3))
            });
        });
        group.bench_with_input(BenchmarkId::new("steep", length), &length, |b, &length| {
            b.iter(|| {
                draw_line(&mut buffer, Color::BLACK, 0, 0, black_box(length / 3), black_box(length))
            });
        });
    }

    group.finish();
}

fn line_fan_benchmark(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new(800, 600);
    let ends: Vec<(i32, i32)> = (0..360)
        .map(|deg| {
            let rad = f64::from(deg).to_radians();
            (400 + (rad.cos() * 290.0) as i32, 300 + (rad.sin() * 290.0) as i32)
        })
        .collect();

    c.bench_function("line_fan_360", |b| {
        b.iter(|| {
            for &(x, y) in &ends {
                draw_line(&mut buffer, Color::RED, 400, 300, black_box(x), black_box(y));
            }
        });
    });
}

fn clipped_line_benchmark(c: &mut Criterion) {
    let mut buffer = PixelBuffer::new(100, 100);

    c.bench_function("line_mostly_clipped", |b| {
        b.iter(|| draw_line(&mut buffer, Color::BLUE, black_box(-2_000), 50, black_box(2_000), 50));
    });
}

criterion_group!(benches, line_length_benchmark, line_fan_benchmark, clipped_line_benchmark);
criterion_main!(benches);
