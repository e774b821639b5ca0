//! Real-input frequency transforms behind a narrow interface.
//!
//! The spectral mixer only needs four things: plan a forward transform, run
//! it, plan an inverse transform, run it. [`TransformProvider`] captures
//! exactly that, so any FFT library with the same real-transform semantics
//! can be swapped in. Plans are cheap to build for the working length and
//! are dropped after each mix; nothing is cached between calls.
//!
//! Scaling convention: both directions are unnormalized, so a forward pass
//! followed by an inverse pass multiplies the signal by `len`. Callers
//! compensate (the spectral mixer scales the forward bins by `1/len`).

use std::sync::Arc;

use log::trace;
use rustfft::{num_complex::Complex, Fft, FftPlanner};

use crate::error::{MixError, Result};

/// Number of one-sided bins produced for a real signal of length `len`.
#[inline]
pub const fn spectrum_len(len: usize) -> usize {
    len / 2 + 1
}

/// Forward real-to-complex transform of a fixed length.
pub trait ForwardTransform {
    /// Length of the real input.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Transform `input` (`len` samples) into `spectrum` (`len/2 + 1` bins).
    fn process(&self, input: &[f32], spectrum: &mut [Complex<f32>]) -> Result<()>;
}

/// Inverse complex-to-real transform of a fixed length.
pub trait InverseTransform {
    /// Length of the real output.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reconstruct `output` (`len` samples) from `spectrum` (`len/2 + 1` bins).
    ///
    /// Only the real parts of the DC and Nyquist bins are used.
    fn process(&self, spectrum: &[Complex<f32>], output: &mut [f32]) -> Result<()>;
}

/// Source of transform plans.
pub trait TransformProvider {
    type Forward: ForwardTransform;
    type Inverse: InverseTransform;

    fn plan_forward(&self, len: usize) -> Result<Self::Forward>;
    fn plan_inverse(&self, len: usize) -> Result<Self::Inverse>;
}

/// Default provider backed by `rustfft`.
///
/// Real transforms are computed with a full-length complex FFT: the input is
/// widened to complex for the forward direction, and the one-sided spectrum
/// is mirrored into its Hermitian-symmetric full form for the inverse.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustFft;

pub struct RustFftForward {
    fft: Arc<dyn Fft<f32>>,
    len: usize,
}

pub struct RustFftInverse {
    fft: Arc<dyn Fft<f32>>,
    len: usize,
}

impl TransformProvider for RustFft {
    type Forward = RustFftForward;
    type Inverse = RustFftInverse;

    fn plan_forward(&self, len: usize) -> Result<RustFftForward> {
        validate_len(len)?;
        trace!("planning forward transform, len {len}");
        let fft = FftPlanner::new().plan_fft_forward(len);
        Ok(RustFftForward { fft, len })
    }

    fn plan_inverse(&self, len: usize) -> Result<RustFftInverse> {
        validate_len(len)?;
        trace!("planning inverse transform, len {len}");
        let fft = FftPlanner::new().plan_fft_inverse(len);
        Ok(RustFftInverse { fft, len })
    }
}

impl ForwardTransform for RustFftForward {
    fn len(&self) -> usize {
        self.len
    }

    fn process(&self, input: &[f32], spectrum: &mut [Complex<f32>]) -> Result<()> {
        let len = self.len();
        check_size(len, input.len())?;
        check_size(spectrum_len(len), spectrum.len())?;

        let mut buffer: Vec<Complex<f32>> = input.iter().map(|&s| Complex::new(s, 0.0)).collect();
        self.fft.process(&mut buffer);

        spectrum.copy_from_slice(&buffer[..spectrum_len(len)]);
        Ok(())
    }
}

impl InverseTransform for RustFftInverse {
    fn len(&self) -> usize {
        self.len
    }

    fn process(&self, spectrum: &[Complex<f32>], output: &mut [f32]) -> Result<()> {
        let len = self.len();
        let half = len / 2;
        check_size(spectrum_len(len), spectrum.len())?;
        check_size(len, output.len())?;

        let mut buffer = vec![Complex::new(0.0, 0.0); len];
        buffer[..=half].copy_from_slice(spectrum);
        // DC and Nyquist of a real signal carry no imaginary part
        buffer[0].im = 0.0;
        buffer[half].im = 0.0;
        for k in 1..half {
            buffer[len - k] = spectrum[k].conj();
        }

        self.fft.process(&mut buffer);

        for (o, c) in output.iter_mut().zip(&buffer) {
            *o = c.re;
        }
        Ok(())
    }
}

fn validate_len(len: usize) -> Result<()> {
    if len == 0 {
        return Err(MixError::InvalidLength {
            len,
            reason: "transform length must be non-zero",
        });
    }
    if len % 2 != 0 {
        return Err(MixError::InvalidLength {
            len,
            reason: "real transform length must be even",
        });
    }
    Ok(())
}

#[inline]
fn check_size(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(MixError::SpectrumSize { expected, found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_spectrum_len() {
        assert_eq!(spectrum_len(1024), 513);
        assert_eq!(spectrum_len(2), 2);
    }

    #[test]
    fn test_plan_lengths() {
        let forward = RustFft.plan_forward(16).unwrap();
        let inverse = RustFft.plan_inverse(16).unwrap();
        assert_eq!(forward.len(), 16);
        assert_eq!(inverse.len(), 16);
        assert!(!forward.is_empty());
        assert!(!inverse.is_empty());
    }

    #[test]
    fn test_rejects_bad_lengths() {
        assert!(matches!(
            RustFft.plan_forward(0),
            Err(MixError::InvalidLength { len: 0, .. })
        ));
        assert!(matches!(
            RustFft.plan_inverse(7),
            Err(MixError::InvalidLength { len: 7, .. })
        ));
    }

    #[test]
    fn test_forward_of_cosine() {
        let len = 64;
        let input: Vec<f32> = (0..len)
            .map(|i| (2.0 * PI * 3.0 * i as f32 / len as f32).cos())
            .collect();
        let forward = RustFft.plan_forward(len).unwrap();
        let mut spectrum = vec![Complex::new(0.0, 0.0); spectrum_len(len)];

        forward.process(&input, &mut spectrum).unwrap();

        // unnormalized: a unit cosine lands len/2 in its bin
        assert!((spectrum[3].re - 32.0).abs() < 1e-3);
        assert!(spectrum[3].im.abs() < 1e-3);
        for (k, bin) in spectrum.iter().enumerate() {
            if k != 3 {
                assert!(bin.norm() < 1e-3, "leakage in bin {k}: {bin}");
            }
        }
    }

    #[test]
    fn test_round_trip_scales_by_len() {
        let len = 32;
        let input: Vec<f32> = (0..len).map(|i| ((i * 5) % 7) as f32 / 7.0 - 0.4).collect();
        let forward = RustFft.plan_forward(len).unwrap();
        let inverse = RustFft.plan_inverse(len).unwrap();
        let mut spectrum = vec![Complex::new(0.0, 0.0); spectrum_len(len)];
        let mut output = vec![0.0; len];

        forward.process(&input, &mut spectrum).unwrap();
        inverse.process(&spectrum, &mut output).unwrap();

        for (o, i) in output.iter().zip(&input) {
            assert!((o / len as f32 - i).abs() < 1e-5);
        }
    }

    #[test]
    fn test_inverse_ignores_dc_imaginary() {
        let len = 8;
        let inverse = RustFft.plan_inverse(len).unwrap();
        let mut spectrum = vec![Complex::new(0.0, 0.0); spectrum_len(len)];
        spectrum[0] = Complex::new(2.0, 5.0);
        let mut output = vec![0.0; len];

        inverse.process(&spectrum, &mut output).unwrap();

        assert!(output.iter().all(|&s| (s - 2.0).abs() < 1e-6));
    }

    #[test]
    fn test_wrong_buffer_sizes() {
        let forward = RustFft.plan_forward(16).unwrap();
        let mut spectrum = vec![Complex::new(0.0, 0.0); 9];
        let err = forward.process(&[0.0; 15], &mut spectrum).unwrap_err();
        assert!(matches!(err, MixError::SpectrumSize { expected: 16, found: 15 }));

        let inverse = RustFft.plan_inverse(16).unwrap();
        let mut output = vec![0.0; 16];
        let err = inverse.process(&spectrum[..8], &mut output).unwrap_err();
        assert!(matches!(err, MixError::SpectrumSize { expected: 9, found: 8 }));
    }
}
