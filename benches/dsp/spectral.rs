//! Benchmarks for the spectral mixer.
//!
//! Plans are rebuilt on every call, so these numbers include planning.

use std::hint::black_box;

use criterion::Criterion;
use wavemix::{
    dsp::{spectral_mix_with, RustFft},
    wavetable, PhaseInterpolation,
};

pub fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/spectral");

    let a = wavetable::sine();
    let b = wavetable::ramp();

    for phase in [PhaseInterpolation::Linear, PhaseInterpolation::ShortestArc] {
        group.bench_function(phase.name(), |bench| {
            bench.iter(|| {
                spectral_mix_with(
                    &RustFft,
                    black_box(&a),
                    black_box(&b),
                    black_box(0.5),
                    phase,
                )
            })
        });
    }

    group.finish();
}
