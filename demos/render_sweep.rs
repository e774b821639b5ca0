//! Render a mix sweep to WAV without opening an audio device.
//!
//! Plays one second of each mix ratio from 0% to 100% in 25% steps, first
//! with the crossfade tables and then with the spectral ones, and writes
//! `sweep_crossfade.wav` and `sweep_spectral.wav` to the current directory.
//!
//! Run with: cargo run --example render_sweep

use color_eyre::eyre::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use wavemix::{
    compute_mixes,
    playback::WavetableOscillator,
    wavetable,
};

const SAMPLE_RATE: u32 = 48_000;

fn main() -> Result<()> {
    color_eyre::install()?;

    let sine = wavetable::sine();
    let ramp = wavetable::ramp();
    let steps = [0.0, 0.25, 0.5, 0.75, 1.0];

    let mut crossfades = Vec::new();
    let mut spectrals = Vec::new();
    for &mix in &steps {
        let out = compute_mixes(&sine, &ramp, mix)?;
        crossfades.push(wavetable::to_table(&out.crossfade));
        spectrals.push(wavetable::to_table(&out.spectral));
    }

    render("sweep_crossfade.wav", &crossfades)?;
    render("sweep_spectral.wav", &spectrals)?;
    Ok(())
}

fn render(path: &str, tables: &[wavetable::Table]) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    let mut block = vec![0.0f32; SAMPLE_RATE as usize];

    for table in tables {
        let mut osc = WavetableOscillator::new(*table);
        osc.set_frequency(110.0);
        osc.set_gain(0.8);
        osc.render(&mut block, SAMPLE_RATE as f32);
        for &s in &block {
            writer.write_sample(s)?;
        }
    }

    writer.finalize()?;
    println!("Wrote {} ({} steps)", path, tables.len());
    Ok(())
}
