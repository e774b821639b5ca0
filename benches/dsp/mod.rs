//! Benchmarks for the individual mixing stages.

mod mix;
mod resample;
mod spectral;

pub use mix::bench_crossfade;
pub use resample::bench_resample;
pub use spectral::bench_spectral;
