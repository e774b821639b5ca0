//! Benchmarks for the full orchestrated mix.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavemix::compute_mixes;

use crate::SOURCE_LENGTHS;

pub fn bench_compute_mixes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/compute_mixes");

    for &len in SOURCE_LENGTHS {
        let a: Vec<f32> = (0..len)
            .map(|i| (std::f32::consts::TAU * i as f32 / len as f32).sin())
            .collect();
        let b: Vec<f32> = (0..len).map(|i| 2.0 * i as f32 / len as f32 - 1.0).collect();

        group.bench_with_input(BenchmarkId::new("sources", len), &len, |bench, _| {
            bench.iter(|| compute_mixes(black_box(&a), black_box(&b), black_box(0.3)))
        });
    }

    group.finish();
}
