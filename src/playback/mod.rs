//! Audition playback: loop a wavetable at an audible pitch.
//!
//! The player is meant to live inside an audio callback. All control goes
//! through [`MessageReceiver`], drained at the top of every block, so the
//! callback never locks or allocates.

pub mod message;
pub mod oscillator;

pub use message::{MessageReceiver, PlaybackMessage};
pub use oscillator::WavetableOscillator;

use crate::wavetable::Table;

pub struct TablePlayer<R: MessageReceiver> {
    oscillator: WavetableOscillator,
    rx: R,
    playing: bool,
}

impl<R: MessageReceiver> TablePlayer<R> {
    pub fn new(table: Table, rx: R) -> Self {
        Self {
            oscillator: WavetableOscillator::new(table),
            rx,
            playing: true,
        }
    }

    /// Apply every pending control message.
    pub fn process_messages(&mut self) {
        while let Some(msg) = self.rx.pop() {
            match msg {
                PlaybackMessage::SetTable(table) => self.oscillator.set_table(table),
                PlaybackMessage::SetFrequency { hz } => self.oscillator.set_frequency(hz),
                PlaybackMessage::SetPlaying(playing) => {
                    if playing && !self.playing {
                        self.oscillator.reset();
                    }
                    self.playing = playing;
                }
            }
        }
    }

    pub fn render_block(&mut self, out: &mut [f32], sample_rate: f32) {
        self.process_messages();

        if self.playing {
            self.oscillator.render(out, sample_rate);
        } else {
            out.fill(0.0);
        }
    }

    pub fn oscillator(&self) -> &WavetableOscillator {
        &self.oscillator
    }
}
