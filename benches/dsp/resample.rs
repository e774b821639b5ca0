//! Benchmarks for fixed-length resampling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavemix::{dsp::resample, WORKING_LENGTH};

use crate::SOURCE_LENGTHS;

pub fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/resample");

    for &len in SOURCE_LENGTHS {
        let source: Vec<f32> = (0..len).map(|i| (i as f32 * 0.01).sin()).collect();

        group.bench_with_input(BenchmarkId::new("to_working_length", len), &len, |b, _| {
            b.iter(|| resample(black_box(&source), black_box(WORKING_LENGTH)))
        });
    }

    group.finish();
}
