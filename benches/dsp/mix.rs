//! Benchmarks for the sample-domain crossfade.

use std::hint::black_box;

use criterion::Criterion;
use wavemix::{dsp::mix, wavetable};

pub fn bench_crossfade(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/crossfade");

    let a = wavetable::sine();
    let b = wavetable::ramp();
    let mut output = vec![0.0f32; a.len()];

    group.bench_function("allocating", |bench| {
        bench.iter(|| mix::crossfade(black_box(&a), black_box(&b), black_box(0.5)))
    });

    group.bench_function("into", |bench| {
        bench.iter(|| {
            mix::crossfade_into(
                black_box(&a),
                black_box(&b),
                black_box(0.5),
                black_box(&mut output),
            )
        })
    });

    group.finish();
}
