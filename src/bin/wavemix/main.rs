//! wavemix - audition crossfade and spectral blends of two wavetables
//!
//! Run with: cargo run -- [FILE_A] [FILE_B]

mod app;
mod ui;

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::warn;
use wavemix::{MixConfig, PhaseInterpolation};

use app::AudioOutput;
use ui::{MixState, UiApp};

#[derive(Parser, Debug)]
#[command(name = "wavemix", version, about = "Blend two single-cycle wavetables")]
struct Args {
    /// Mono WAV file for source A (defaults to a sine)
    file_a: Option<PathBuf>,

    /// Mono WAV file for source B (defaults to a ramp)
    file_b: Option<PathBuf>,

    /// Initial mix position in percent (0 = A, 100 = B)
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(i32).range(0..=100))]
    mix: i32,

    /// Interpolate bin phases along the shortest arc
    #[arg(long)]
    shortest_arc: bool,

    /// Audition pitch in Hz
    #[arg(short, long, default_value_t = 110.0)]
    frequency: f32,

    /// Run without opening an audio device
    #[arg(long)]
    no_audio: bool,

    /// Write log output to this file [default: wavemix.log in the temp dir]
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&log_path(args.log_file.clone()))?;

    let phase = if args.shortest_arc {
        PhaseInterpolation::ShortestArc
    } else {
        PhaseInterpolation::Linear
    };
    let config = MixConfig::new().mix(args.mix as f32 * 0.01).phase(phase);

    let mut state = MixState::new(config, args.frequency);
    if let Some(path) = args.file_a {
        state.load_source(0, path);
    }
    if let Some(path) = args.file_b {
        state.load_source(1, path);
    }

    // Keep the stream alive for the whole UI session
    let mut audio = None;
    if !args.no_audio {
        match AudioOutput::start(state.audition_table()) {
            Ok(output) => audio = Some(output),
            Err(err) => {
                warn!("audio disabled: {err:#}");
                state.status = Some(format!("audio disabled: {err}"));
            }
        }
    }
    let (stream, tx) = match audio {
        Some(output) => (Some(output.stream), Some(output.tx)),
        None => (None, None),
    };

    let mut terminal = ratatui::init();
    let result = UiApp::new(state, tx).run(&mut terminal);
    ratatui::restore();
    drop(stream);
    result
}

/// The terminal belongs to the UI, so logs always go to a file.
fn log_path(requested: Option<PathBuf>) -> PathBuf {
    requested.unwrap_or_else(|| std::env::temp_dir().join("wavemix.log"))
}

fn init_logging(path: &Path) -> EyreResult<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_default_to_temp_dir() {
        assert_eq!(log_path(None), std::env::temp_dir().join("wavemix.log"));
        assert_eq!(
            log_path(Some(PathBuf::from("run.log"))),
            PathBuf::from("run.log")
        );
    }

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from(["wavemix", "a.wav", "--mix", "30", "--log-file", "x.log"])
            .unwrap();
        assert_eq!(args.mix, 30);
        assert_eq!(args.log_file, Some(PathBuf::from("x.log")));
        assert!(Args::try_parse_from(["wavemix", "--mix", "101"]).is_err());
    }
}
