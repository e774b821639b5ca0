//! Blend two single-cycle wavetables two ways: a sample-domain crossfade
//! and a spectral interpolation of per-harmonic magnitude and phase.
//!
//! Sources of any length are first resampled to [`WORKING_LENGTH`]; see
//! [`compute_mixes`] for the one-call entry point.

pub mod dsp;
pub mod error;
pub mod io;
pub mod mixer;
pub mod playback;
pub mod wavetable;

pub use dsp::spectral::PhaseInterpolation;
pub use error::{MixError, Result};
pub use mixer::{compute_mixes, compute_mixes_with, MixConfig, MixOutput};

/// Length every table is resampled to before mixing.
pub const WORKING_LENGTH: usize = 1024;
