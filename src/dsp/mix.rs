//! Sample-domain crossfading of two wavetables.

/*
Crossfade Mixing
================

A crossfade blends two tables point by point using complementary weights.
It is the simplest way to morph one waveform into another, and the
reference the spectral mixer is judged against.

Vocabulary
----------

  mix           The blend control.
                  mix = 0.0  →  100% table A
                  mix = 0.5  →  50% A, 50% B
                  mix = 1.0  →  100% table B

  extrapolation Values outside [0, 1] are not clamped. mix = 1.2 pushes
                past B, away from A; mix = -0.2 does the opposite. The UI
                never produces such values, but the math stays defined.


The Math
--------

For each sample:

    output = (A × (1 - mix)) + (B × mix)

The weights always sum to 1.0, so two tables peaking at 1.0 never mix to
more than 1.0 inside the nominal range.


What a Crossfade Does to Timbre
-------------------------------

In the time domain the blend is perfectly smooth, but the spectrum of the
result is the COMPLEX sum of both spectra. Where the two waveforms share a
harmonic with opposite phase, that harmonic cancels part-way through the
fade:

    A = sin(x)         B = -sin(x)
    mix = 0.5   →   output = 0          ← fundamental vanishes

The spectral mixer avoids this by interpolating magnitudes instead of
complex values.
*/

use crate::error::{MixError, Result};

/// Blend `a` and `b` with a linear crossfade.
///
/// output = (A × (1-mix)) + (B × mix)
///
/// # Arguments
/// * `a` - First table
/// * `b` - Second table, same length as `a`
/// * `mix` - Mix ratio (0.0 = all A, 1.0 = all B), not clamped
pub fn crossfade(a: &[f32], b: &[f32], mix: f32) -> Result<Vec<f32>> {
    let mut out = vec![0.0; a.len()];
    crossfade_into(a, b, mix, &mut out)?;
    Ok(out)
}

/// Allocation-free crossfade into a caller-provided buffer.
///
/// All three slices must have the same length.
#[inline]
pub fn crossfade_into(a: &[f32], b: &[f32], mix: f32, out: &mut [f32]) -> Result<()> {
    check_lengths(a.len(), b.len())?;
    check_lengths(a.len(), out.len())?;

    let weight_a = 1.0 - mix;
    let weight_b = mix;

    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = (sa * weight_a) + (sb * weight_b);
    }

    Ok(())
}

#[inline]
pub(crate) fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(MixError::LengthMismatch { left, right });
    }
    Ok(())
}
