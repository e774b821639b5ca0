// Purpose - getting source tables in from disk

pub mod wav;

pub use wav::read_mono_wav;
