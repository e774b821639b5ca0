//! End-to-end benchmarks of a slider move.

mod compute;

pub use compute::bench_compute_mixes;
