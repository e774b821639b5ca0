//! Mix orchestration: bring two raw sources to the working length and run
//! both mixers over them.
//!
//! ```
//! use wavemix::{compute_mixes, WORKING_LENGTH};
//!
//! let a: Vec<f32> = (0..400).map(|i| (i as f32 / 400.0 * std::f32::consts::TAU).sin()).collect();
//! let b = vec![0.25; 37];
//!
//! let out = compute_mixes(&a, &b, 0.5).unwrap();
//! assert_eq!(out.crossfade.len(), WORKING_LENGTH);
//! assert_eq!(out.spectral.len(), WORKING_LENGTH);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::{debug, trace};

use crate::dsp::mix::crossfade;
use crate::dsp::resample::resample;
use crate::dsp::spectral::{spectral_mix_with, PhaseInterpolation};
use crate::dsp::transform::{RustFft, TransformProvider};
use crate::error::Result;
use crate::WORKING_LENGTH;

/// Settings for one mix computation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixConfig {
    /// 0.0 = all A, 1.0 = all B. Not clamped.
    pub mix: f32,
    pub phase: PhaseInterpolation,
}

impl MixConfig {
    pub fn new() -> Self {
        Self {
            mix: 0.5,
            phase: PhaseInterpolation::Linear,
        }
    }

    /// Set the mix ratio.
    pub fn mix(mut self, mix: f32) -> Self {
        self.mix = mix;
        self
    }

    /// Set the phase interpolation used by the spectral mixer.
    pub fn phase(mut self, phase: PhaseInterpolation) -> Self {
        self.phase = phase;
        self
    }
}

impl Default for MixConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Both mixes of one computation, each `WORKING_LENGTH` samples long.
#[derive(Debug, Clone, PartialEq)]
pub struct MixOutput {
    pub crossfade: Vec<f32>,
    pub spectral: Vec<f32>,
}

/// Resample both sources and compute the crossfade and spectral mixes.
///
/// Sources may have any length, including zero (treated as silence).
pub fn compute_mixes(raw_a: &[f32], raw_b: &[f32], mix: f32) -> Result<MixOutput> {
    compute_mixes_with(&MixConfig::new().mix(mix), &RustFft, raw_a, raw_b)
}

/// [`compute_mixes`] with explicit settings and transform provider.
pub fn compute_mixes_with<T: TransformProvider>(
    config: &MixConfig,
    transform: &T,
    raw_a: &[f32],
    raw_b: &[f32],
) -> Result<MixOutput> {
    debug!(
        "mixing sources of {} and {} samples at {:.2} ({} phase)",
        raw_a.len(),
        raw_b.len(),
        config.mix,
        config.phase.name()
    );

    let a = resample(raw_a, WORKING_LENGTH);
    let b = resample(raw_b, WORKING_LENGTH);

    let crossfade = crossfade(&a, &b, config.mix)?;
    let spectral = spectral_mix_with(transform, &a, &b, config.mix, config.phase)?;

    trace!(
        "mix peaks: crossfade {:.3}, spectral {:.3}",
        peak(&crossfade),
        peak(&spectral)
    );

    Ok(MixOutput {
        crossfade,
        spectral,
    })
}

fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0, |m: f32, s| m.max(s.abs()))
}
