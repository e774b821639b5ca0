//! Audio output for auditioning tables

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use log::{error, info};
use rtrb::{Producer, RingBuffer};

use wavemix::{
    playback::{PlaybackMessage, TablePlayer},
    wavetable::Table,
};

/// Largest block rendered in one go inside the callback
const MAX_BLOCK_SIZE: usize = 2048;

/// Room for a few rounds of UI updates between callbacks
const CONTROL_QUEUE_SIZE: usize = 16;

/// Running output stream plus its control channel.
pub struct AudioOutput {
    /// Dropping the stream stops playback
    pub stream: cpal::Stream,
    pub tx: Producer<PlaybackMessage>,
}

impl AudioOutput {
    /// Open the default output device and start looping `table`.
    pub fn start(table: Table) -> EyreResult<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        info!("audio output: {} Hz, {} channels", sample_rate, channels);

        let (tx, rx) = RingBuffer::<PlaybackMessage>::new(CONTROL_QUEUE_SIZE);
        let mut player = TablePlayer::new(table, rx);
        let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let block = &mut render_buf[..frames_to_render];
                    player.render_block(block, sample_rate);

                    // Copy to output (mono to all channels)
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            |err| error!("audio stream error: {}", err),
            None,
        )?;

        stream.play()?;

        Ok(Self { stream, tx })
    }
}
