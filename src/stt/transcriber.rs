use crate::error::{DiarscribeError, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for speech-to-text transcription.
///
/// This trait allows swapping implementations (real Whisper vs mock).
pub trait Transcriber: Send + Sync {
    /// Transcribe audio samples to text.
    ///
    /// # Arguments
    /// * `audio` - Audio samples as 16-bit PCM mono
    /// * `sample_rate` - Sample rate of `audio` in Hz
    ///
    /// # Returns
    /// Transcribed text or error. An empty slice transcribes to an empty
    /// string; slice length validation is the caller's concern.
    fn transcribe(&self, audio: &[i16], sample_rate: u32) -> Result<String>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the transcriber is ready
    fn is_ready(&self) -> bool;
}

/// Implement Transcriber for Arc<T> to allow sharing across pipelines.
impl<T: Transcriber> Transcriber for Arc<T> {
    fn transcribe(&self, audio: &[i16], sample_rate: u32) -> Result<String> {
        (**self).transcribe(audio, sample_rate)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Mock transcriber for testing
#[derive(Debug)]
pub struct MockTranscriber {
    model_name: String,
    responses: Vec<String>,
    next: AtomicUsize,
    should_fail: bool,
}

impl MockTranscriber {
    /// Create a new mock transcriber with default settings
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            responses: vec!["mock transcription".to_string()],
            next: AtomicUsize::new(0),
            should_fail: false,
        }
    }

    /// Configure the mock to return a specific response
    pub fn with_response(mut self, response: &str) -> Self {
        self.responses = vec![response.to_string()];
        self
    }

    /// Configure the mock to return a sequence of responses, one per call.
    /// After the script is exhausted, the last response repeats.
    pub fn with_responses(mut self, responses: &[&str]) -> Self {
        assert!(!responses.is_empty(), "need at least one response");
        self.responses = responses.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Configure the mock to fail on transcribe
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Transcriber for MockTranscriber {
    fn transcribe(&self, _audio: &[i16], _sample_rate: u32) -> Result<String> {
        if self.should_fail {
            return Err(DiarscribeError::TranscriptionInferenceFailed {
                message: "mock transcription failure".to_string(),
            });
        }

        let idx = self.next.fetch_add(1, Ordering::Relaxed);
        Ok(self.responses[idx.min(self.responses.len() - 1)].clone())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}
