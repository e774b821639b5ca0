//! Frequency-domain blending of two wavetables.

/*
Spectral Mixing
===============

Instead of blending samples, the spectral mixer blends HARMONICS. Each
table is transformed into its one-sided spectrum (N/2 + 1 bins for a table
of N samples), and every bin is split into

  magnitude   how loud that harmonic is
  phase       where in the cycle that harmonic starts

Both are interpolated separately and the bin is rebuilt from the result:

    mag   = |A[k]| × (1 - mix) + |B[k]| × mix
    phase = ∠A[k]  × (1 - mix) + ∠B[k]  × mix
    out[k] = mag × e^(i·phase)

then the mixed spectrum is transformed back to N samples.

Why bother? A crossfade adds complex bins, so harmonics that disagree in
phase partially cancel mid-fade and the timbre thins out. Interpolating
magnitudes keeps every harmonic at a level between its two endpoints:

    harmonic k    |A|    |B|    crossfade @0.5    spectral @0.5
    in phase      1.0    1.0         1.0              1.0
    opposite      1.0    1.0         0.0              1.0


Normalization
-------------

The forward transform is unnormalized: a bin's magnitude grows with N. The
bins are scaled by 1/N before mixing so magnitudes are table-size
independent. The inverse transform is also unnormalized and supplies the
matching factor of N, so at mix = 0 the output reproduces table A.


Phase Wrapping
--------------

Phase lives on a circle, but the default interpolation treats it as a
number in (-π, π]. Two phases that sit just either side of ±π are close on
the circle yet far apart numerically:

    ∠A = +3.0   ∠B = -3.0   mix = 0.5
    Linear       →  0.0     (swings through the far side of the circle)
    ShortestArc  →  π       (stays between them)

`Linear` is the default because it matches the behaviour these blends were
tuned against. `ShortestArc` must be asked for explicitly.

DC (bin 0) and Nyquist (bin N/2) go through the same formula. Their
imaginary parts are discarded by the inverse transform.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::{PI, TAU};

use rustfft::num_complex::Complex;

use super::mix::check_lengths;
use super::transform::{spectrum_len, ForwardTransform, InverseTransform, RustFft, TransformProvider};
use crate::error::Result;

/// How bin phases travel between table A and table B.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PhaseInterpolation {
    /// Straight interpolation of the angle values.
    #[default]
    Linear,
    /// Interpolate along the shorter way round the circle.
    ShortestArc,
}

impl PhaseInterpolation {
    pub fn toggled(self) -> Self {
        match self {
            PhaseInterpolation::Linear => PhaseInterpolation::ShortestArc,
            PhaseInterpolation::ShortestArc => PhaseInterpolation::Linear,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseInterpolation::Linear => "linear",
            PhaseInterpolation::ShortestArc => "shortest-arc",
        }
    }
}

/// Spectrally blend `a` and `b` with the default transform and linear phase.
///
/// Both tables must have the same, even, non-zero length.
pub fn spectral_mix(a: &[f32], b: &[f32], mix: f32) -> Result<Vec<f32>> {
    spectral_mix_with(&RustFft, a, b, mix, PhaseInterpolation::Linear)
}

/// Spectrally blend `a` and `b` using the given transform provider and phase mode.
pub fn spectral_mix_with<T: TransformProvider>(
    transform: &T,
    a: &[f32],
    b: &[f32],
    mix: f32,
    phase: PhaseInterpolation,
) -> Result<Vec<f32>> {
    check_lengths(a.len(), b.len())?;
    let len = a.len();

    let mut spectrum_a = normalized_spectrum(transform, a)?;
    let spectrum_b = normalized_spectrum(transform, b)?;

    for (bin_a, &bin_b) in spectrum_a.iter_mut().zip(spectrum_b.iter()) {
        *bin_a = mix_bin(*bin_a, bin_b, mix, phase);
    }

    let inverse = transform.plan_inverse(len)?;
    let mut out = vec![0.0; len];
    inverse.process(&spectrum_a, &mut out)?;
    Ok(out)
}

/// Per-bin magnitudes of `table`, scaled by `1/len`.
///
/// These are the magnitudes the spectral mixer interpolates.
pub fn magnitude_spectrum<T: TransformProvider>(transform: &T, table: &[f32]) -> Result<Vec<f32>> {
    Ok(normalized_spectrum(transform, table)?
        .iter()
        .map(|bin| bin.norm())
        .collect())
}

fn normalized_spectrum<T: TransformProvider>(
    transform: &T,
    table: &[f32],
) -> Result<Vec<Complex<f32>>> {
    let len = table.len();
    let forward = transform.plan_forward(len)?;
    let mut spectrum = vec![Complex::new(0.0, 0.0); spectrum_len(len)];
    forward.process(table, &mut spectrum)?;

    let scale = 1.0 / len as f32;
    for bin in spectrum.iter_mut() {
        *bin *= scale;
    }
    Ok(spectrum)
}

#[inline]
fn mix_bin(a: Complex<f32>, b: Complex<f32>, mix: f32, phase: PhaseInterpolation) -> Complex<f32> {
    let (mag_a, phase_a) = a.to_polar();
    let (mag_b, phase_b) = b.to_polar();

    let magnitude = mag_a * (1.0 - mix) + mag_b * mix;
    let angle = match phase {
        PhaseInterpolation::Linear => phase_a * (1.0 - mix) + phase_b * mix,
        PhaseInterpolation::ShortestArc => phase_a + wrap_phase(phase_b - phase_a) * mix,
    };

    Complex::from_polar(magnitude, angle)
}

/// Wrap an angle difference into (-π, π].
#[inline]
fn wrap_phase(delta: f32) -> f32 {
    let wrapped = delta - TAU * (delta / TAU).round();
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
