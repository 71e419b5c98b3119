use crate::error::{DiarscribeError, Result};
use std::path::Path;
use std::sync::Arc;

/// One contiguous interval of one speaker speaking, as reported by the
/// diarization capability.
///
/// Turns are ordered by start time. Turns of the same speaker never overlap,
/// but turns from different speakers may interleave.
#[derive(Debug, Clone, PartialEq)]
pub struct DiarizationTurn {
    pub start: f64,
    pub end: f64,
    pub speaker: String,
}

impl DiarizationTurn {
    pub fn new(start: f64, end: f64, speaker: impl Into<String>) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Trait for speaker diarization.
///
/// This trait allows swapping implementations (RTTM sidecar files vs mock).
pub trait Diarizer: Send + Sync {
    /// Produce the speaker turn sequence for an audio file, ordered by
    /// start time.
    fn diarize(&self, audio_path: &Path) -> Result<Vec<DiarizationTurn>>;

    /// Get the name of the diarization backend
    fn name(&self) -> &str;
}

/// Implement Diarizer for Arc<T> to allow sharing across pipelines.
impl<T: Diarizer> Diarizer for Arc<T> {
    fn diarize(&self, audio_path: &Path) -> Result<Vec<DiarizationTurn>> {
        (**self).diarize(audio_path)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Mock diarizer for testing
#[derive(Debug, Clone, Default)]
pub struct MockDiarizer {
    turns: Vec<DiarizationTurn>,
    should_fail: bool,
}

impl MockDiarizer {
    /// Create a new mock diarizer that returns no turns
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to return specific turns
    pub fn with_turns(mut self, turns: Vec<DiarizationTurn>) -> Self {
        self.turns = turns;
        self
    }

    /// Configure the mock to fail on diarize
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Diarizer for MockDiarizer {
    fn diarize(&self, audio_path: &Path) -> Result<Vec<DiarizationTurn>> {
        if self.should_fail {
            Err(DiarscribeError::Diarization {
                file: audio_path.display().to_string(),
                message: "mock diarization failure".to_string(),
            })
        } else {
            Ok(self.turns.clone())
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
