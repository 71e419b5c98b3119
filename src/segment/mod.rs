//! Speech segments produced by merging diarization turns.

pub mod merger;

/// A possibly-merged, filtered unit of speech used as transcription input.
///
/// `end` is only mutated while merging; `text` is filled in by the
/// transcription driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
            text: String::new(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}
