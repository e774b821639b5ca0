//! Fixed-length resampling by linear interpolation.

/*
Resampling a Wavetable
======================

A wavetable is one period of a waveform. Source files come in any length
(a 44.1 kHz recording of a 110 Hz cycle holds ~401 samples, a hand-drawn
table might hold 256 or 2048), but the mixers want every table at the same
working length. Resampling here changes the sample COUNT only: the time
base is irrelevant because the table always represents exactly one cycle.

For each output index i the matching source position is

    j  = i × (input_len / output_len)
    j1 = floor(j)              (clamped to the last sample)
    j2 = min(j1 + 1, last)
    mu = j - j1

    out[i] = in[j1] × (1 - mu) + in[j2] × mu

    in:   ●───────●───────●───────●
          0       1       2       3
    out:  ○────○────○────○────○────○
              ↑
              j = 0.67: two thirds of the way from in[0] to in[1]

No low-pass filter is applied before decimation. Shrinking a long, bright
source will alias; that is accepted for auditioning purposes.
*/

/// Resample `input` to exactly `new_len` samples.
///
/// An empty input produces `new_len` zeros: the front end can hold an empty
/// source before a file is chosen, and that must still mix cleanly.
pub fn resample(input: &[f32], new_len: usize) -> Vec<f32> {
    let mut out = vec![0.0; new_len];
    resample_into(input, &mut out);
    out
}

/// Resample `input` into `out`, using `out.len()` as the target length.
pub fn resample_into(input: &[f32], out: &mut [f32]) {
    if input.is_empty() {
        out.fill(0.0);
        return;
    }

    let last = input.len() - 1;
    // f64 keeps i × (len / len) exact for the identity case.
    let step = input.len() as f64 / out.len().max(1) as f64;

    for (i, o) in out.iter_mut().enumerate() {
        let j = i as f64 * step;
        let j1 = (j as usize).min(last);
        let j2 = (j1 + 1).min(last);
        let mu = (j - j1 as f64) as f32;
        *o = lerp(input[j1], input[j2], mu);
    }
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, mu: f32) -> f32 {
    a * (1.0 - mu) + b * mu
}
