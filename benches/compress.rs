//! Benchmarks for per-frame depth compression.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use kinlog::depth::DepthCompressor;

/// Smooth ramp with per-row offset, roughly shaped like an indoor depth map.
fn synthetic_frame(width: usize, height: usize) -> Vec<u8> {
    let mut raw = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let d = (800 + x * 3000 / width + y * 500 / height) as i16;
            raw.extend_from_slice(&d.to_le_bytes());
        }
    }
    raw
}

fn bench_compress_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_frame");

    for (width, height) in [(320, 240), (640, 480)] {
        let raw = synthetic_frame(width, height);
        let mut compressor = DepthCompressor::new(raw.len(), 9);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &raw,
            |b, raw| {
                b.iter(|| compressor.compress_frame(black_box(raw)).unwrap().len());
            },
        );
    }

    group.finish();
}

fn bench_compress_levels(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress_levels");
    let raw = synthetic_frame(640, 480);

    for level in [1, 6, 9] {
        let mut compressor = DepthCompressor::new(raw.len(), level);

        group.bench_with_input(BenchmarkId::from_parameter(level), &raw, |b, raw| {
            b.iter(|| compressor.compress_frame(black_box(raw)).unwrap().len());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compress_frame, bench_compress_levels);
criterion_main!(benches);
