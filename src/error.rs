//! Error types for diarscribe.

use thiserror::Error;

/// The pipeline stage a per-file failure originated from.
///
/// Lets callers report or branch on the failing stage without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    AudioLoad,
    Diarization,
    Transcription,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::AudioLoad => write!(f, "audio load"),
            PipelineStage::Diarization => write!(f, "diarization"),
            PipelineStage::Transcription => write!(f, "transcription"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DiarscribeError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // Audio loading errors
    #[error("Failed to load audio from {file}: {message}")]
    AudioLoad { file: String, message: String },

    // Diarization errors
    #[error("Diarization sidecar not found for {file}: {message}")]
    DiarizationSidecarNotFound { file: String, message: String },

    #[error("Diarization failed for {file}: {message}")]
    Diarization { file: String, message: String },

    // Transcription errors
    #[error("Transcription model not found at {path}")]
    TranscriptionModelNotFound { path: String },

    #[error("Transcription inference failed: {message}")]
    TranscriptionInferenceFailed { message: String },

    #[error("Transcription failed for {file}: {message}")]
    Transcription { file: String, message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

impl DiarscribeError {
    /// The pipeline stage this error belongs to, if it is a per-file
    /// pipeline failure.
    pub fn stage(&self) -> Option<PipelineStage> {
        match self {
            DiarscribeError::AudioLoad { .. } => Some(PipelineStage::AudioLoad),
            DiarscribeError::DiarizationSidecarNotFound { .. }
            | DiarscribeError::Diarization { .. } => Some(PipelineStage::Diarization),
            DiarscribeError::TranscriptionModelNotFound { .. }
            | DiarscribeError::TranscriptionInferenceFailed { .. }
            | DiarscribeError::Transcription { .. } => Some(PipelineStage::Transcription),
            _ => None,
        }
    }
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DiarscribeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_file_not_found_display() {
        let error = DiarscribeError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn test_config_invalid_value_display() {
        let error = DiarscribeError::ConfigInvalidValue {
            key: "diarization.min_segment_length".to_string(),
            message: "must be non-negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for diarization.min_segment_length: must be non-negative"
        );
    }

    #[test]
    fn test_audio_load_display() {
        let error = DiarscribeError::AudioLoad {
            file: "meeting.wav".to_string(),
            message: "truncated header".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to load audio from meeting.wav: truncated header"
        );
    }

    #[test]
    fn test_diarization_display() {
        let error = DiarscribeError::Diarization {
            file: "meeting.wav".to_string(),
            message: "malformed RTTM line 3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Diarization failed for meeting.wav: malformed RTTM line 3"
        );
    }

    #[test]
    fn test_transcription_model_not_found_display() {
        let error = DiarscribeError::TranscriptionModelNotFound {
            path: "/models/whisper.bin".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription model not found at /models/whisper.bin"
        );
    }

    #[test]
    fn test_transcription_display() {
        let error = DiarscribeError::Transcription {
            file: "meeting.wav".to_string(),
            message: "out of memory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription failed for meeting.wav: out of memory"
        );
    }

    #[test]
    fn test_stage_classification() {
        let audio = DiarscribeError::AudioLoad {
            file: "a.wav".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(audio.stage(), Some(PipelineStage::AudioLoad));

        let diar = DiarscribeError::Diarization {
            file: "a.wav".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(diar.stage(), Some(PipelineStage::Diarization));

        let stt = DiarscribeError::Transcription {
            file: "a.wav".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(stt.stage(), Some(PipelineStage::Transcription));

        let config = DiarscribeError::ConfigFileNotFound {
            path: "x".to_string(),
        };
        assert_eq!(config.stage(), None);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(PipelineStage::AudioLoad.to_string(), "audio load");
        assert_eq!(PipelineStage::Diarization.to_string(), "diarization");
        assert_eq!(PipelineStage::Transcription.to_string(), "transcription");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: DiarscribeError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: DiarscribeError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_other_display() {
        let error = DiarscribeError::Other("unexpected error".to_string());
        assert_eq!(error.to_string(), "unexpected error");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<DiarscribeError>();
        assert_sync::<DiarscribeError>();
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
