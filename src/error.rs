//! Error type shared by the mixing core and the WAV loader.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MixError>;

#[derive(Debug, Error)]
pub enum MixError {
    /// Two buffers that must be mixed sample-for-sample have different lengths.
    #[error("buffer length mismatch: {left} vs {right} samples")]
    LengthMismatch { left: usize, right: usize },

    /// A transform was requested for a length it cannot handle.
    #[error("invalid transform length {len}: {reason}")]
    InvalidLength { len: usize, reason: &'static str },

    /// A transform plan was handed a buffer of the wrong size.
    #[error("spectrum size mismatch: expected {expected}, found {found}")]
    SpectrumSize { expected: usize, found: usize },

    #[error("WAV decoding failed: {0}")]
    Wav(#[from] hound::Error),

    /// Source files must contain exactly one channel.
    #[error("expected a mono file, found {channels} channels")]
    ChannelCount { channels: u16 },
}
