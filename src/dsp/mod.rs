//! Numeric core: resampling, the two mixers and the transform interface
//! the spectral mixer runs on.
//!
//! Everything here is a pure function over slices. Nothing keeps state
//! between calls, so any of it can run on whichever thread needs it.

/// Fixed-length linear resampling.
pub mod resample;
/// Sample-domain crossfade.
pub mod mix;
/// Magnitude/phase interpolation in the frequency domain.
pub mod spectral;
/// Forward/inverse real transforms and the `rustfft` backend.
pub mod transform;

pub use mix::{crossfade, crossfade_into};
pub use resample::resample;
pub use spectral::{magnitude_spectrum, spectral_mix, spectral_mix_with};
pub use transform::{ForwardTransform, InverseTransform, RustFft, TransformProvider};
