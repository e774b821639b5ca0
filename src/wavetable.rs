//! Built-in source tables used before any file is loaded.
//!
//! Both tables span one cycle with the last sample landing on the cycle
//! end (`p = i / (N - 1)`), so they plot as closed shapes.

use crate::WORKING_LENGTH;

/// A heap-free table at the working length.
pub type Table = [f32; WORKING_LENGTH];

/// One period of a sine wave.
pub fn sine() -> Table {
    let mut table = [0.0; WORKING_LENGTH];
    for (i, s) in table.iter_mut().enumerate() {
        *s = (std::f64::consts::TAU * cycle_position(i)).sin() as f32;
    }
    table
}

/// One period of a rising sawtooth, centred on zero.
///
/// Starts at 0, climbs to +1 at mid-cycle, jumps to -1 and climbs back to 0.
pub fn ramp() -> Table {
    let mut table = [0.0; WORKING_LENGTH];
    for (i, s) in table.iter_mut().enumerate() {
        let shifted = cycle_position(i) + 0.5;
        *s = (shifted.fract() * 2.0 - 1.0) as f32;
    }
    table
}

/// Copy an arbitrary buffer into a fixed table, resampling if needed.
pub fn to_table(samples: &[f32]) -> Table {
    let mut table = [0.0; WORKING_LENGTH];
    crate::dsp::resample::resample_into(samples, &mut table);
    table
}

#[inline]
fn cycle_position(i: usize) -> f64 {
    i as f64 / (WORKING_LENGTH - 1) as f64
}
