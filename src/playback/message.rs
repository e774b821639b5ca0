#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::wavetable::Table;

/// Control messages for a [`TablePlayer`](super::TablePlayer).
///
/// Tables travel by value so the audio thread never frees heap memory.
#[allow(clippy::large_enum_variant)]
#[derive(Debug, Copy, Clone)]
pub enum PlaybackMessage {
    SetTable(Table),
    SetFrequency { hz: f32 },
    SetPlaying(bool),
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<PlaybackMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<PlaybackMessage> {
    fn pop(&mut self) -> Option<PlaybackMessage> {
        Consumer::pop(self).ok()
    }
}

/// Fixed message list, handy for offline rendering and tests.
impl MessageReceiver for std::collections::VecDeque<PlaybackMessage> {
    fn pop(&mut self) -> Option<PlaybackMessage> {
        self.pop_front()
    }
}
