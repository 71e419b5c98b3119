//! Audio loading and slicing.

pub mod slicer;
pub mod wav;

pub use wav::Waveform;
