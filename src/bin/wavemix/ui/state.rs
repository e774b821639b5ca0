//! Mix state owned by the UI thread
//!
//! Holds the two raw sources and the current settings, and recomputes both
//! mixes through the library whenever one of them changes.

use std::path::PathBuf;

use log::warn;
use wavemix::{
    compute_mixes_with,
    dsp::{magnitude_spectrum, RustFft},
    io::read_mono_wav,
    wavetable::{self, Table},
    MixConfig, MixOutput, PhaseInterpolation, WORKING_LENGTH,
};

/// Number of harmonics shown in the spectrum view
const SPECTRUM_BINS: usize = 64;

/// Floor for the spectrum view (dB)
pub const SPECTRUM_FLOOR_DB: f64 = -100.0;

/// Which table is sent to the audio output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audition {
    SourceA,
    SourceB,
    Crossfade,
    Spectral,
}

impl Audition {
    pub fn next(self) -> Self {
        match self {
            Audition::SourceA => Audition::SourceB,
            Audition::SourceB => Audition::Crossfade,
            Audition::Crossfade => Audition::Spectral,
            Audition::Spectral => Audition::SourceA,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Audition::SourceA => "A",
            Audition::SourceB => "B",
            Audition::Crossfade => "crossfade",
            Audition::Spectral => "spectral",
        }
    }
}

/// One of the two inputs
pub struct Source {
    /// Display name (file name or built-in table name)
    pub name: String,
    /// File the samples came from, if any
    pub path: Option<PathBuf>,
    /// Samples as loaded, any length
    pub samples: Vec<f32>,
}

impl Source {
    fn builtin(name: &str, table: Table) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            samples: table.to_vec(),
        }
    }

    /// Load from `path`, keeping the current samples if that fails.
    fn load(&mut self, path: PathBuf) -> Result<(), String> {
        match read_mono_wav(&path) {
            Ok(samples) => {
                self.name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.samples = samples;
                self.path = Some(path);
                Ok(())
            }
            Err(err) => {
                warn!("could not load {}: {}", path.display(), err);
                Err(format!("{}: {}", path.display(), err))
            }
        }
    }
}

pub struct MixState {
    pub sources: [Source; 2],
    pub config: MixConfig,
    pub output: MixOutput,
    pub audition: Audition,
    /// Audition pitch in Hz
    pub frequency: f32,
    pub playing: bool,
    /// Magnitude spectrum of the auditioned table: (harmonic, dB)
    pub spectrum: Vec<(f64, f64)>,
    /// Last error or info message
    pub status: Option<String>,
}

impl MixState {
    /// Start from the built-in sine (A) and ramp (B).
    pub fn new(config: MixConfig, frequency: f32) -> Self {
        let mut state = Self {
            sources: [
                Source::builtin("sine", wavetable::sine()),
                Source::builtin("ramp", wavetable::ramp()),
            ],
            config,
            output: MixOutput {
                crossfade: vec![0.0; WORKING_LENGTH],
                spectral: vec![0.0; WORKING_LENGTH],
            },
            audition: Audition::Spectral,
            frequency,
            playing: true,
            spectrum: Vec::new(),
            status: None,
        };
        state.recompute();
        state
    }

    /// Replace source 0 (A) or 1 (B) with a file.
    pub fn load_source(&mut self, which: usize, path: PathBuf) {
        self.status = None;
        self.read_source(which, path);
        self.recompute();
    }

    /// Re-read every source that came from a file.
    pub fn reload(&mut self) {
        self.status = None;
        for which in 0..self.sources.len() {
            if let Some(path) = self.sources[which].path.clone() {
                self.read_source(which, path);
            }
        }
        self.recompute();
    }

    fn read_source(&mut self, which: usize, path: PathBuf) {
        if let Err(msg) = self.sources[which].load(path) {
            self.status = Some(msg);
        }
    }

    /// Mix ratio as the 0..=100 slider value
    pub fn mix_percent(&self) -> i32 {
        (self.config.mix * 100.0).round() as i32
    }

    /// Move the slider. The value is clamped; the core itself never clamps.
    pub fn set_mix_percent(&mut self, percent: i32) {
        let percent = percent.clamp(0, 100);
        if percent != self.mix_percent() {
            self.config.mix = percent as f32 * 0.01;
            self.recompute();
        }
    }

    pub fn toggle_phase(&mut self) {
        self.config.phase = self.config.phase.toggled();
        self.recompute();
    }

    pub fn next_audition(&mut self) {
        self.audition = self.audition.next();
        self.update_spectrum();
    }

    /// Shift the audition pitch by `semitones`, staying in an audible range.
    pub fn transpose(&mut self, semitones: i32) {
        let factor = 2.0f32.powf(semitones as f32 / 12.0);
        self.frequency = (self.frequency * factor).clamp(20.0, 4_000.0);
    }

    pub fn phase(&self) -> PhaseInterpolation {
        self.config.phase
    }

    /// The table currently being auditioned, at the working length
    pub fn audition_table(&self) -> Table {
        match self.audition {
            Audition::SourceA => wavetable::to_table(&self.sources[0].samples),
            Audition::SourceB => wavetable::to_table(&self.sources[1].samples),
            Audition::Crossfade => wavetable::to_table(&self.output.crossfade),
            Audition::Spectral => wavetable::to_table(&self.output.spectral),
        }
    }

    fn recompute(&mut self) {
        match compute_mixes_with(
            &self.config,
            &RustFft,
            &self.sources[0].samples,
            &self.sources[1].samples,
        ) {
            Ok(output) => self.output = output,
            Err(err) => {
                warn!("mix failed: {err}");
                self.status = Some(format!("mix failed: {err}"));
            }
        }
        self.update_spectrum();
    }

    fn update_spectrum(&mut self) {
        let table = self.audition_table();
        match magnitude_spectrum(&RustFft, &table) {
            Ok(mags) => {
                self.spectrum = mags
                    .iter()
                    .enumerate()
                    .skip(1)
                    .take(SPECTRUM_BINS)
                    .map(|(k, &m)| {
                        let db = 20.0 * (m as f64).max(1e-9).log10();
                        (k as f64, db.max(SPECTRUM_FLOOR_DB))
                    })
                    .collect();
            }
            Err(err) => warn!("spectrum failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_clamps_and_recomputes() {
        let mut state = MixState::new(MixConfig::new().mix(0.0), 110.0);
        let before = state.output.crossfade.clone();

        state.set_mix_percent(150);

        assert_eq!(state.mix_percent(), 100);
        assert_ne!(state.output.crossfade, before);
    }

    #[test]
    fn audition_cycles() {
        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.audition = Audition::SourceA;
        state.next_audition();
        assert_eq!(state.audition, Audition::SourceB);
        assert_eq!(state.audition_table(), wavetable::ramp());
    }

    #[test]
    fn failed_load_keeps_source() {
        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.load_source(0, PathBuf::from("/definitely/not/here.wav"));
        assert_eq!(state.sources[0].name, "sine");
        assert!(state.status.is_some());
    }

    #[test]
    fn successful_load_clears_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cycle.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        for s in wavetable::ramp() {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();

        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.load_source(0, PathBuf::from("/definitely/not/here.wav"));
        assert!(state.status.is_some());

        state.load_source(0, path);

        assert_eq!(state.sources[0].name, "cycle.wav");
        assert!(state.status.is_none());
    }

    #[test]
    fn reload_keeps_error_from_either_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.wav");
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        hound::WavWriter::create(&path, spec).unwrap().finalize().unwrap();

        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.load_source(0, path.clone());
        assert!(state.status.is_none());
        std::fs::remove_file(&path).unwrap();

        state.reload();

        assert!(state.status.is_some());
    }

    #[test]
    fn spectrum_shows_fundamental() {
        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.audition = Audition::Spectral;
        state.next_audition();
        assert_eq!(state.spectrum.len(), SPECTRUM_BINS);
        // sine: harmonic 1 is the loudest
        let loudest = state
            .spectrum
            .iter()
            .cloned()
            .fold((0.0, f64::MIN), |best, p| if p.1 > best.1 { p } else { best });
        assert_eq!(loudest.0, 1.0);
    }

    #[test]
    fn transpose_stays_in_range() {
        let mut state = MixState::new(MixConfig::default(), 110.0);
        state.transpose(12);
        assert!((state.frequency - 220.0).abs() < 1e-3);
        state.transpose(-120);
        assert_eq!(state.frequency, 20.0);
    }
}
