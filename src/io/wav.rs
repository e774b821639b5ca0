//! Loading source tables from WAV files.
//!
//! Any sample rate and length is accepted; the file is read as one raw
//! buffer and left for the resampler to fit. Only mono files are allowed.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::{debug, warn};

use crate::error::{MixError, Result};

/// Read every sample of a mono WAV file as `f32` in [-1, 1].
pub fn read_mono_wav(path: impl AsRef<Path>) -> Result<Vec<f32>> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.channels != 1 {
        warn!("{} has {} channels, refusing", path.display(), spec.channels);
        return Err(MixError::ChannelCount {
            channels: spec.channels,
        });
    }

    let samples = decode(reader)?;
    debug!(
        "loaded {}: {} samples, {} Hz, {}-bit {:?}",
        path.display(),
        samples.len(),
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );
    Ok(samples)
}

fn decode<R: std::io::Read>(reader: WavReader<R>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Float => reader.into_samples::<f32>().collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_val))
                .collect::<std::result::Result<_, _>>()?
        }
    };
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};

    fn write_int16(path: &Path, channels: u16, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_reads_int16_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        write_int16(&path, 1, &[0, 16384, -16384, i16::MIN]);

        let samples = read_mono_wav(&path).unwrap();

        assert_eq!(samples, vec![0.0, 0.5, -0.5, -1.0]);
    }

    #[test]
    fn test_reads_float_mono() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48_000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for s in [0.25f32, -0.75, 1.0] {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        assert_eq!(read_mono_wav(&path).unwrap(), vec![0.25, -0.75, 1.0]);
    }

    #[test]
    fn test_rejects_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_int16(&path, 2, &[0, 0, 100, -100]);

        let err = read_mono_wav(&path).unwrap_err();

        assert!(matches!(err, MixError::ChannelCount { channels: 2 }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_mono_wav(dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, MixError::Wav(_)));
    }

    #[test]
    fn test_empty_file_is_empty_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        write_int16(&path, 1, &[]);

        assert!(read_mono_wav(&path).unwrap().is_empty());
    }
}
