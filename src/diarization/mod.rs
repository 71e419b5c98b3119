//! Speaker diarization capability.

pub mod diarizer;
pub mod rttm;

pub use diarizer::{DiarizationTurn, Diarizer, MockDiarizer};
pub use rttm::RttmDiarizer;
